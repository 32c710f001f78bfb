//! Membership form: collect, validate, confirm.

use gsm_site_core::form::{validate, FormSubmission, ValidationError};
use gsm_site_core::notice::ConfirmationNotice;
use gsm_site_core::{Result, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement};

use crate::dom::{self, JsResultExt};
use crate::notice;

pub const ERROR_CLASS: &str = "form-error";

/// Snapshot the form the way the browser would submit it: unchecked
/// checkboxes are absent, file inputs are skipped.
pub fn collect(form: &HtmlFormElement) -> Result<FormSubmission> {
    let data = FormData::new_with_form(form).dom()?;
    let mut out = FormSubmission::new();
    for entry in data.entries() {
        let pair = js_sys::Array::from(&entry.dom()?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            out.insert(name, value);
        }
    }
    Ok(out)
}

fn error_slot(doc: &Document, form: &HtmlFormElement) -> Result<Element> {
    if let Some(existing) = form.query_selector(&format!(".{ERROR_CLASS}")).dom()? {
        return Ok(existing);
    }
    let slot = doc.create_element("div").dom()?;
    slot.set_class_name(ERROR_CLASS);
    slot.set_attribute("role", "alert").dom()?;
    match form.query_selector("[type=submit]").dom()? {
        Some(submit) => {
            form.insert_before(&slot, Some(&submit)).dom()?;
        }
        None => {
            form.append_child(&slot).dom()?;
        }
    }
    Ok(slot)
}

/// Show `err` inline and move focus to the offending field.
pub fn show_error(doc: &Document, form: &HtmlFormElement, err: &ValidationError) -> Result<()> {
    error_slot(doc, form)?.set_text_content(Some(&err.to_string()));
    let field = form
        .query_selector(&format!("[name=\"{}\"]", err.field()))
        .dom()?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(field) = field {
        field.focus().dom()?;
    }
    Ok(())
}

pub fn clear_error(form: &HtmlFormElement) -> Result<()> {
    if let Some(slot) = form.query_selector(&format!(".{ERROR_CLASS}")).dom()? {
        slot.remove();
    }
    Ok(())
}

/// Validate and, when valid, confirm and reset. Returns the reported failure.
pub fn submit(
    doc: &Document,
    form: &HtmlFormElement,
    config: &SiteConfig,
) -> Result<Option<ValidationError>> {
    let submission = collect(form)?;
    match validate(&submission) {
        Err(err) => {
            log::debug!("application rejected: {err}");
            show_error(doc, form, &err)?;
            Ok(Some(err))
        }
        Ok(()) => {
            clear_error(form)?;
            notice::show(
                doc,
                &ConfirmationNotice::membership(config.notice_auto_dismiss_ms),
            )?;
            form.reset();
            log::info!("membership application accepted");
            Ok(None)
        }
    }
}

pub fn init(doc: &Document, config: &SiteConfig) -> Result<()> {
    let form = dom::by_id(doc, "membership-form")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| gsm_site_core::SiteError::dom("#membership-form is not a form"))?;
    let doc_ref = doc.clone();
    let cfg = config.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = submit(&doc_ref, &target, &cfg) {
            log::warn!("membership submit failed: {e}");
        }
    })
}
