//! Statistic counters animated on first visibility.

use gsm_site_core::counter::{parse_target, TARGET_ATTR};
use gsm_site_core::observer::VisibilityObserver;
use gsm_site_core::{CounterAnimation, Result, SiteConfig};
use web_sys::{Document, Element};

use crate::dom;
use crate::observer::DomObserver;

/// Render one frame and schedule the next until the animation is done.
fn run(el: Element, mut anim: CounterAnimation) {
    let frame = anim.tick();
    el.set_text_content(Some(&frame.text));
    if frame.done {
        return;
    }
    if let Err(e) = dom::request_frame(move || run(el, anim)) {
        log::warn!("counter frame scheduling failed: {e}");
    }
}

pub fn start(el: &Element, config: &SiteConfig) {
    let raw = el.get_attribute(TARGET_ATTR).unwrap_or_default();
    match parse_target(&raw) {
        Ok(target) => run(
            el.clone(),
            CounterAnimation::with_steps(target, config.counter_steps, config.plus_suffix_target),
        ),
        Err(e) => log::warn!("skipping counter: {e}"),
    }
}

pub fn init(doc: &Document, config: &SiteConfig) -> Result<DomObserver> {
    let mut observer = DomObserver::new(&config.counter_observer)?;
    let cfg = config.clone();
    observer.on_enter(Box::new(move |el: &Element| start(el, &cfg)));
    let counters = dom::query_all(doc, ".stat-number")?;
    log::debug!("observing {} counters", counters.len());
    for el in counters {
        observer.observe(el);
    }
    Ok(observer)
}
