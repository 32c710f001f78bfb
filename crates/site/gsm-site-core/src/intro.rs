//! Page-load intro: hero fade-in schedule and console branding.

use crate::config::SiteConfig;

/// Class removed from `<body>` once the page has loaded.
pub const LOADING_CLASS: &str = "loading";

/// `(text, css)` pairs logged with `%c` styling when the script starts.
pub const BRANDING: [(&str, &str); 3] = [
    (
        "🏎️ GS MOTORSPORTS F1 WEBSITE 🏁",
        "color: #DC143C; font-size: 20px; font-weight: bold; font-family: Orbitron;",
    ),
    (
        "F1 Scrollbar Active! Racing red track with car thumb.",
        "color: #FF1744; font-size: 14px;",
    ),
    (
        "Website by Racing Enthusiasts for Racing Enthusiasts",
        "color: #FFFFFF; font-size: 12px;",
    ),
];

/// Reveal one hero element after `delay_ms`. Missing elements are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroStep {
    pub selector: &'static str,
    pub delay_ms: u32,
}

pub fn hero_schedule(config: &SiteConfig) -> Vec<IntroStep> {
    [".hero-title", ".hero-description", ".cta-button"]
        .into_iter()
        .zip(config.hero_delays_ms)
        .map(|(selector, delay_ms)| IntroStep { selector, delay_ms })
        .collect()
}

/// Console arguments for one branding line: the `%c`-prefixed text and its style.
pub fn branding_args(line: (&str, &str)) -> (String, String) {
    (format!("%c{}", line.0), line.1.to_string())
}
