//! Browser bindings for the GS Motorsports site.
//!
//! `start` runs when the module is instantiated: it reads the optional
//! `window.GSM_SITE_CONFIG` object, installs console logging, and wires every
//! controller once the document has been parsed. A controller whose markup is
//! missing simply stays inactive.

pub mod counters;
pub mod dom;
pub mod form;
pub mod intro;
pub mod logger;
pub mod menu;
pub mod nav;
pub mod notice;
pub mod observer;
pub mod reveal;
pub mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use gsm_site_core::form::validate_all;
use gsm_site_core::{FormSubmission, SiteConfig, SiteError, SiteState};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::observer::DomObserver;

/// Global name under which a page may provide configuration.
pub const CONFIG_GLOBAL: &str = "GSM_SITE_CONFIG";

/// `document.readyState` values.
pub const READY_LOADING: &str = "loading";
pub const READY_COMPLETE: &str = "complete";

/// Controllers and observers that must outlive `start`.
pub struct Site {
    state: Rc<RefCell<SiteState>>,
    observers: Vec<DomObserver>,
}

impl Site {
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Elements still waiting for their first visibility event.
    pub fn pending_targets(&self) -> usize {
        self.observers.iter().map(DomObserver::pending).sum()
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn to_js(err: SiteError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Log a controller setup failure; missing markup is expected on some pages.
fn report<T>(feature: &str, result: gsm_site_core::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_missing_target() => {
            log::debug!("{feature} inactive: {e}");
            None
        }
        Err(e) => {
            log::warn!("{feature} setup failed ({}): {e}", e.category());
            None
        }
    }
}

/// Read `window.GSM_SITE_CONFIG`, falling back to defaults on absence or error.
pub fn load_config(window: &Window) -> SiteConfig {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return SiteConfig::default();
    }
    let parsed = swb::from_value::<SiteConfig>(raw)
        .map_err(|e| SiteError::Config {
            reason: e.to_string(),
        })
        .and_then(|cfg| cfg.validate().map(|()| cfg));
    match parsed {
        Ok(cfg) => cfg,
        Err(e) => {
            web_sys::console::warn_1(&format!("{CONFIG_GLOBAL} ignored: {e}").into());
            SiteConfig::default()
        }
    }
}

/// Wire every controller against `doc`.
pub fn init_page(doc: &Document, config: SiteConfig) -> Site {
    let state = Rc::new(RefCell::new(SiteState::new(config.clone())));
    let mut observers = Vec::new();

    report("navigation bar", nav::init(doc, &state));
    let menu = report("mobile menu", menu::init(doc, &state));
    if let Some(links) = report("smooth scrolling", scroll::init(doc, &state, menu)) {
        log::debug!("{links} navigation links wired");
    }
    observers.extend(report("counters", counters::init(doc, &config)));
    report("membership form", form::init(doc, &config));
    observers.extend(report("scroll reveal", reveal::init(doc, &config)));

    let site = Site { state, observers };
    log::debug!(
        "{} observers, {} targets pending",
        site.observer_count(),
        site.pending_targets()
    );
    site
}

fn boot(doc: &Document, config: SiteConfig) {
    let site = init_page(doc, config);
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    log::info!("site controllers ready");
}

fn header_offset() -> f64 {
    SITE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|site| site.state.borrow().config().header_offset)
            .unwrap_or_else(|| SiteConfig::default().header_offset)
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = dom::window().map_err(to_js)?;
    let doc = dom::document().map_err(to_js)?;
    let config = load_config(&window);
    logger::init(config.log_level_filter());
    intro::print_branding();

    // Markup calls `scrollToSection('id')` from the hero CTA.
    let cta = Closure::<dyn Fn(String)>::new(|id: String| {
        if scroll_to_section(&id).is_err() {
            log::warn!("scrollToSection({id}) failed");
        }
    });
    js_sys::Reflect::set(&window, &JsValue::from_str("scrollToSection"), &cta.into_js_value())?;

    if doc.ready_state() == READY_LOADING {
        let ready_doc = doc.clone();
        let ready_cfg = config.clone();
        dom::listen(&doc, "DOMContentLoaded", move |_| {
            boot(&ready_doc, ready_cfg.clone())
        })
        .map_err(to_js)?;
    } else {
        boot(&doc, config.clone());
    }

    if doc.ready_state() == READY_COMPLETE {
        intro::run(&doc, &config).map_err(to_js)?;
    } else {
        let load_doc = doc.clone();
        dom::listen(&window, "load", move |_| {
            if let Err(e) = intro::run(&load_doc, &config) {
                log::warn!("intro failed: {e}");
            }
        })
        .map_err(to_js)?;
    }
    Ok(())
}

/// Smooth-scroll to a section by id. Returns `false` if the section is absent.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) -> Result<bool, JsError> {
    let doc = dom::document().map_err(|e| JsError::new(&e.to_string()))?;
    scroll::scroll_to_id(&doc, section_id, header_offset())
        .map_err(|e| JsError::new(&e.to_string()))
}

#[derive(Serialize)]
struct ReportedFailure {
    field: String,
    message: String,
}

/// Validate a `{ name, email, phone, major, safety }` object.
/// Returns every failure in rule order; an empty array means valid.
#[wasm_bindgen(js_name = validateMembership)]
pub fn validate_membership(fields: JsValue) -> Result<JsValue, JsError> {
    let object: serde_json::Map<String, serde_json::Value> = swb::from_value(fields)
        .map_err(|e| JsError::new(&format!("validateMembership expects an object: {e}")))?;
    let failures: Vec<ReportedFailure> =
        validate_all(&FormSubmission::from_json_object(&object))
            .into_iter()
            .map(|err| ReportedFailure {
                field: err.field().to_string(),
                message: err.to_string(),
            })
            .collect();
    swb::to_value(&failures).map_err(|e| JsError::new(&format!("output error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
