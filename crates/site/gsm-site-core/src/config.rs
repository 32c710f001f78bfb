//! Tunables for the page controllers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Options handed to a viewport-visibility observer.
///
/// `root_margin` uses the CSS margin shorthand understood by
/// `IntersectionObserver` (e.g. `"0px 0px -100px 0px"`). Omitted fields take
/// the browser's own defaults (threshold `0`, margin `"0px"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::new(0.0, "0px")
    }
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
        }
    }
}

/// Configuration for every page controller.
/// Partial JSON is accepted; anything omitted falls back to [`SiteConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset (px) above which the navigation bar is "scrolled".
    pub scroll_threshold: f64,
    /// Height (px) of the fixed header subtracted from anchor targets.
    pub header_offset: f64,

    /// Counters advance by `target / counter_steps` per frame.
    pub counter_steps: f64,
    /// The one target value rendered with a trailing `+`.
    pub plus_suffix_target: i64,
    pub counter_observer: ObserverOptions,

    pub reveal_observer: ObserverOptions,
    pub reveal_selectors: Vec<String>,

    /// Confirmation overlay lifetime.
    pub notice_auto_dismiss_ms: u32,
    /// Delays for the hero title, description and call-to-action fade-in.
    pub hero_delays_ms: [u32; 3],

    /// `log` level filter name (`"error"` .. `"trace"`, or `"off"`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            header_offset: 80.0,
            counter_steps: 50.0,
            plus_suffix_target: 45,
            counter_observer: ObserverOptions::new(0.7, "0px 0px -100px 0px"),
            reveal_observer: ObserverOptions::new(0.1, "0px 0px -50px 0px"),
            reveal_selectors: vec![
                ".team-member".into(),
                ".event-card".into(),
                ".news-article".into(),
                ".stat-card".into(),
            ],
            notice_auto_dismiss_ms: 5000,
            hero_delays_ms: [300, 600, 900],
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON document over the defaults and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.counter_steps > 0.0) {
            return Err(SiteError::Config {
                reason: format!("counter_steps must be positive, got {}", self.counter_steps),
            });
        }
        for (name, opts) in [
            ("counter_observer", &self.counter_observer),
            ("reveal_observer", &self.reveal_observer),
        ] {
            if !(0.0..=1.0).contains(&opts.threshold) {
                return Err(SiteError::Config {
                    reason: format!(
                        "{name}.threshold must be within [0, 1], got {}",
                        opts.threshold
                    ),
                });
            }
        }
        Ok(())
    }

    /// Selector list joined for `querySelectorAll`.
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "header_offset": 64 }"#).unwrap();
        assert_eq!(cfg.header_offset, 64.0);
        assert_eq!(cfg.scroll_threshold, 50.0);
        assert_eq!(cfg.counter_observer.root_margin, "0px 0px -100px 0px");
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = SiteConfig::from_json(r#"{ "reveal_observer": { "threshold": 1.5, "root_margin": "0px" } }"#)
            .unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn partial_observer_override_is_accepted() {
        let cfg = SiteConfig::from_json(r#"{ "counter_observer": { "threshold": 0.5 } }"#).unwrap();
        assert_eq!(cfg.counter_observer, ObserverOptions::new(0.5, "0px"));
        assert_eq!(cfg.reveal_observer, SiteConfig::default().reveal_observer);

        let cfg = SiteConfig::from_json(r#"{ "reveal_observer": { "root_margin": "10px" } }"#).unwrap();
        assert_eq!(cfg.reveal_observer.threshold, 0.0);
        assert_eq!(cfg.reveal_observer.root_margin, "10px");
    }

    #[test]
    fn rejects_zero_steps() {
        let cfg = SiteConfig {
            counter_steps: 0.0,
            ..SiteConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let cfg = SiteConfig {
            log_level: "chatty".into(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            SiteConfig::default().reveal_selector(),
            ".team-member, .event-card, .news-article, .stat-card"
        );
    }
}
