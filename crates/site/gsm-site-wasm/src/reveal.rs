//! One-shot `fade-in-up` entrance for content cards.

use gsm_site_core::observer::VisibilityObserver;
use gsm_site_core::{Result, SiteConfig};
use web_sys::{Document, Element};

use crate::dom;
use crate::observer::DomObserver;

pub const REVEAL_CLASS: &str = "fade-in-up";

pub fn init(doc: &Document, config: &SiteConfig) -> Result<DomObserver> {
    let mut observer = DomObserver::new(&config.reveal_observer)?;
    observer.on_enter(Box::new(|el: &Element| {
        if let Err(e) = dom::set_class(el, REVEAL_CLASS, true) {
            log::warn!("reveal failed: {e}");
        }
    }));
    let selector = config.reveal_selector();
    if selector.is_empty() {
        return Ok(observer);
    }
    for el in dom::query_all(doc, &selector)? {
        observer.observe(el);
    }
    Ok(observer)
}
