//! `IntersectionObserver`-backed [`VisibilityObserver`].

use std::cell::RefCell;
use std::rc::Rc;

use gsm_site_core::observer::{EnterCallback, OneShotObserver, VisibilityObserver};
use gsm_site_core::{ObserverOptions, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::JsResultExt;

/// One-shot visibility observer for DOM elements.
///
/// The browser reports entries; [`OneShotObserver`] decides which ones fire,
/// and fired elements are unobserved on the platform side as well.
pub struct DomObserver {
    core: Rc<RefCell<OneShotObserver<Element>>>,
    js: IntersectionObserver,
    // Keeps the entry callback alive for as long as the observer is.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl DomObserver {
    pub fn new(options: &ObserverOptions) -> Result<Self> {
        let core: Rc<RefCell<OneShotObserver<Element>>> = Rc::default();
        let shared = core.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if shared
                        .borrow_mut()
                        .intersect(&target, entry.is_intersecting())
                    {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let js = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .dom()?;

        Ok(Self {
            core,
            js,
            _callback: callback,
        })
    }

    /// Targets observed but not yet entered.
    pub fn pending(&self) -> usize {
        self.core.borrow().pending()
    }
}

impl Drop for DomObserver {
    // The entry callback goes with `self`; the browser must stop calling it.
    fn drop(&mut self) {
        self.js.disconnect();
    }
}

impl VisibilityObserver<Element> for DomObserver {
    fn observe(&mut self, target: Element) {
        self.js.observe(&target);
        self.core.borrow_mut().observe(target);
    }

    fn on_enter(&mut self, callback: EnterCallback<Element>) {
        self.core.borrow_mut().on_enter(callback);
    }
}
