//! Thin helpers over `web_sys` lookups.

use std::cell::RefCell;

use gsm_site_core::{Result, SiteError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Map a thrown JS value into the core error type.
pub trait JsResultExt<T> {
    fn dom(self) -> Result<T>;
}

impl<T> JsResultExt<T> for core::result::Result<T, JsValue> {
    fn dom(self) -> Result<T> {
        self.map_err(|e| SiteError::dom(format!("{e:?}")))
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::missing("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::missing("document"))
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element> {
    doc.get_element_by_id(id)
        .ok_or_else(|| SiteError::missing(format!("#{id}")))
}

pub fn html_by_id(doc: &Document, id: &str) -> Result<HtmlElement> {
    by_id(doc, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::dom(format!("#{id} is not an HTML element")))
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Result<Vec<Element>> {
    let node: &web_sys::Node = root.as_ref();
    let list = if let Some(doc) = node.dyn_ref::<Document>() {
        doc.query_selector_all(selector).dom()?
    } else if let Some(el) = node.dyn_ref::<Element>() {
        el.query_selector_all(selector).dom()?
    } else {
        return Ok(Vec::new());
    };
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

pub fn query(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<()> {
    let list = el.class_list();
    if on {
        list.add_1(class).dom()
    } else {
        list.remove_1(class).dom()
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<()> {
    el.style().set_property(property, value).dom()
}

/// Register a listener that lives for the rest of the page session.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .dom()?;
    cb.forget();
    Ok(())
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Listeners tied to one element's lifetime rather than the page's.
///
/// [`ScopedListeners::release`] detaches and drops every handler; until then
/// the closures are owned here.
pub struct ScopedListeners {
    target: web_sys::EventTarget,
    held: RefCell<Vec<(&'static str, Listener)>>,
}

impl ScopedListeners {
    pub fn new(target: &web_sys::EventTarget) -> Self {
        Self {
            target: target.clone(),
            held: RefCell::new(Vec::new()),
        }
    }

    pub fn add<F>(&self, event: &'static str, handler: F) -> Result<()>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let cb = Listener::new(handler);
        self.target
            .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
            .dom()?;
        self.held.borrow_mut().push((event, cb));
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.held.borrow().len()
    }

    /// Detach and drop every handler. Returns how many were released.
    pub fn release(&self) -> usize {
        let held = std::mem::take(&mut *self.held.borrow_mut());
        for (event, cb) in &held {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
                .dom()
            {
                log::warn!("detaching {event} listener failed: {e}");
            }
        }
        held.len()
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout<F: FnOnce() + 'static>(ms: u32, f: F) -> Result<i32> {
    let cb = Closure::once_into_js(f);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            ms.min(i32::MAX as u32) as i32,
        )
        .dom()
}

/// Run `f` before the next repaint.
pub fn request_frame<F: FnOnce() + 'static>(f: F) -> Result<i32> {
    let cb = Closure::once_into_js(f);
    window()?.request_animation_frame(cb.unchecked_ref()).dom()
}
