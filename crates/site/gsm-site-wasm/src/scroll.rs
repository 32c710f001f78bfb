//! Smooth scrolling for in-page navigation links and the hero CTA.

use std::cell::RefCell;
use std::rc::Rc;

use gsm_site_core::scroll::{anchor_target, scroll_top_for};
use gsm_site_core::{MenuState, Result, SiteState};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::menu::MobileMenu;

/// Smooth-scroll so section `id` sits just below the fixed header.
/// Returns `false` when no such section exists.
pub fn scroll_to_id(doc: &Document, id: &str, header_offset: f64) -> Result<bool> {
    let Some(section) = doc
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };
    let top = scroll_top_for(f64::from(section.offset_top()), header_offset);
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&opts);
    Ok(true)
}

pub fn init(
    doc: &Document,
    state: &Rc<RefCell<SiteState>>,
    menu: Option<Rc<MobileMenu>>,
) -> Result<usize> {
    let links = dom::query_all(doc, ".nav-link")?;
    for link in &links {
        let state = state.clone();
        let menu = menu.clone();
        let doc = doc.clone();
        let href_source = link.clone();
        dom::listen(link, "click", move |event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            let offset = state.borrow().config().header_offset;
            match scroll_to_id(&doc, id, offset) {
                Ok(true) => {
                    state.borrow_mut().close_menu();
                    if let Some(menu) = &menu {
                        if let Err(e) = menu.apply(MenuState::Closed) {
                            log::warn!("menu close failed: {e}");
                        }
                    }
                }
                Ok(false) => log::debug!("no section #{id}"),
                Err(e) => log::warn!("scroll to #{id} failed: {e}"),
            }
        })?;
    }
    Ok(links.len())
}
