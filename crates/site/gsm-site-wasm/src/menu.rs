//! Mobile menu toggle and hamburger icon.

use std::cell::RefCell;
use std::rc::Rc;

use gsm_site_core::menu::{BarStyle, MenuState, ACTIVE_CLASS};
use gsm_site_core::{Result, SiteState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom;

#[derive(Clone)]
pub struct MobileMenu {
    toggle: Element,
    menu: Element,
}

impl MobileMenu {
    /// Both `#nav-toggle` and `#nav-menu` must exist.
    pub fn find(doc: &Document) -> Result<Self> {
        Ok(Self {
            toggle: dom::by_id(doc, "nav-toggle")?,
            menu: dom::by_id(doc, "nav-menu")?,
        })
    }

    /// Make the page reflect `state`: menu class plus icon bar styles.
    pub fn apply(&self, state: MenuState) -> Result<()> {
        dom::set_class(&self.menu, ACTIVE_CLASS, state.is_open())?;
        let styles = state.bar_styles();
        for (i, bar) in dom::query_all(&self.toggle, "span")?.iter().enumerate() {
            // Only the first three bars move when opening; closing resets all of them.
            let style = match (styles.get(i), state) {
                (Some(style), _) => *style,
                (None, MenuState::Closed) => BarStyle::NEUTRAL,
                (None, MenuState::Open) => continue,
            };
            let Some(bar) = bar.dyn_ref::<HtmlElement>() else {
                continue;
            };
            if let Some(transform) = style.transform {
                dom::set_style(bar, "transform", transform)?;
            }
            if let Some(opacity) = style.opacity {
                dom::set_style(bar, "opacity", opacity)?;
            }
        }
        Ok(())
    }

    /// Whether `target` is the toggle, the menu, or inside either.
    fn contains(&self, target: Option<&Node>) -> (bool, bool) {
        (self.toggle.contains(target), self.menu.contains(target))
    }
}

pub fn init(doc: &Document, state: &Rc<RefCell<SiteState>>) -> Result<Rc<MobileMenu>> {
    let menu = Rc::new(MobileMenu::find(doc)?);

    {
        let menu = menu.clone();
        let state = state.clone();
        dom::listen(&menu.toggle.clone(), "click", move |_| {
            let next = state.borrow_mut().toggle_menu();
            if let Err(e) = menu.apply(next) {
                log::warn!("menu toggle failed: {e}");
            }
        })?;
    }

    {
        let menu = menu.clone();
        let state = state.clone();
        dom::listen(doc, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let (on_toggle, in_menu) = menu.contains(target.as_ref());
            if state.borrow_mut().document_click(on_toggle, in_menu) {
                if let Err(e) = menu.apply(MenuState::Closed) {
                    log::warn!("menu close failed: {e}");
                }
            }
        })?;
    }

    Ok(menu)
}
