//! Navigation bar: `scrolled` class driven by the window scroll offset.

use std::cell::RefCell;
use std::rc::Rc;

use gsm_site_core::nav::SCROLLED_CLASS;
use gsm_site_core::{Result, SiteState};
use web_sys::{Document, Element, Window};

use crate::dom;

/// Current vertical scroll offset, falling back to the root element's scrollTop.
pub fn scroll_offset(window: &Window, doc: &Document) -> f64 {
    match window.page_y_offset() {
        Ok(y) => y,
        Err(_) => doc
            .document_element()
            .map(|el| f64::from(el.scroll_top()))
            .unwrap_or(0.0),
    }
}

pub fn apply(navbar: &Element, scrolled: bool) -> Result<()> {
    dom::set_class(navbar, SCROLLED_CLASS, scrolled)
}

pub fn init(doc: &Document, state: &Rc<RefCell<SiteState>>) -> Result<()> {
    let navbar = dom::by_id(doc, "navbar")?;
    let window = dom::window()?;
    let state = state.clone();
    let doc_ref = doc.clone();
    let win_ref = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let offset = scroll_offset(&win_ref, &doc_ref);
        let update = state.borrow_mut().on_scroll(offset);
        if let Err(e) = apply(&navbar, update.scrolled) {
            log::warn!("navbar update failed: {e}");
        }
    })
}
