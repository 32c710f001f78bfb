//! Page-load intro and console branding.

use gsm_site_core::intro::{branding_args, hero_schedule, BRANDING, LOADING_CLASS};
use gsm_site_core::{Result, SiteConfig};
use web_sys::Document;

use crate::dom;

pub fn print_branding() {
    for line in BRANDING {
        let (text, css) = branding_args(line);
        web_sys::console::log_2(&text.into(), &css.into());
    }
}

/// Drop the `loading` class and fade the hero in, one element at a time.
pub fn run(doc: &Document, config: &SiteConfig) -> Result<()> {
    if let Some(body) = doc.body() {
        dom::set_class(&body, LOADING_CLASS, false)?;
    }
    for step in hero_schedule(config) {
        let doc = doc.clone();
        dom::set_timeout(step.delay_ms, move || {
            let Some(el) = dom::query(&doc, step.selector) else {
                return;
            };
            if let Err(e) = dom::set_style(&el, "opacity", "1") {
                log::warn!("fading in {} failed: {e}", step.selector);
            }
        })?;
    }
    Ok(())
}
