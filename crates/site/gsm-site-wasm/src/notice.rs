//! Confirmation overlay shown after a successful application.

use std::cell::Cell;
use std::rc::Rc;

use gsm_site_core::notice::{
    ConfirmationNotice, NoticeState, BODY_STYLE, BUTTON_HOVER_TRANSFORM, BUTTON_REST_TRANSFORM,
    BUTTON_STYLE, PANEL_STYLE, TITLE_STYLE,
};
use gsm_site_core::{Result, SiteError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, JsResultExt, ScopedListeners};

pub const NOTICE_CLASS: &str = "membership-notice";

fn styled(doc: &Document, tag: &str, style: &str, text: &str) -> Result<Element> {
    let el = doc.create_element(tag).dom()?;
    el.set_attribute("style", style).dom()?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// A confirmation panel on the page.
///
/// The panel owns its button listeners; dismissing it (by the button or by the
/// timer, whichever comes first) removes the element and releases them.
pub struct NoticePanel {
    panel: Element,
    listeners: Rc<ScopedListeners>,
    dismiss: Rc<dyn Fn()>,
}

impl NoticePanel {
    pub fn element(&self) -> &Element {
        &self.panel
    }

    /// Button handlers still attached.
    pub fn listener_count(&self) -> usize {
        self.listeners.count()
    }

    pub fn dismiss(&self) {
        (self.dismiss)()
    }
}

/// Append the panel to `<body>` and arm its close button and auto-dismiss timer.
pub fn show(doc: &Document, notice: &ConfirmationNotice) -> Result<NoticePanel> {
    let body = doc.body().ok_or_else(|| SiteError::missing("body"))?;

    let panel = styled(doc, "div", PANEL_STYLE, "")?;
    panel.set_class_name(NOTICE_CLASS);
    let title = styled(doc, "h3", TITLE_STYLE, notice.title)?;
    panel.append_child(&title).dom()?;
    let body_text = styled(doc, "p", BODY_STYLE, notice.body)?;
    panel.append_child(&body_text).dom()?;
    let button = styled(doc, "button", BUTTON_STYLE, notice.dismiss_label)?;
    button.set_attribute("type", "button").dom()?;
    panel.append_child(&button).dom()?;

    let listeners = Rc::new(ScopedListeners::new(&button));
    for (event, transform) in [
        ("mouseover", BUTTON_HOVER_TRANSFORM),
        ("mouseout", BUTTON_REST_TRANSFORM),
    ] {
        let target = button.clone();
        listeners.add(event, move |_| {
            let Some(b) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            if let Err(e) = dom::set_style(b, "transform", transform) {
                log::warn!("notice button {event} failed: {e}");
            }
        })?;
    }

    let state = Rc::new(Cell::new(NoticeState::Shown));
    let dismiss: Rc<dyn Fn()> = {
        let panel = panel.clone();
        let listeners = listeners.clone();
        Rc::new(move || {
            let mut s = state.get();
            let first = s.dismiss();
            state.set(s);
            if !first {
                return;
            }
            if panel.parent_node().is_some() {
                panel.remove();
            }
            let released = listeners.release();
            log::debug!("notice dismissed, {released} listeners released");
        })
    };

    let on_click = dismiss.clone();
    listeners.add("click", move |_| on_click())?;
    let on_timeout = dismiss.clone();
    dom::set_timeout(notice.auto_dismiss_ms, move || on_timeout())?;

    body.append_child(&panel).dom()?;
    Ok(NoticePanel {
        panel,
        listeners,
        dismiss,
    })
}
