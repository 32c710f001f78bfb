//! Confirmation overlay shown after a successful application.

use serde::Serialize;

/// Content and presentation of the confirmation panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfirmationNotice {
    pub title: &'static str,
    pub body: &'static str,
    pub dismiss_label: &'static str,
    pub auto_dismiss_ms: u32,
}

impl ConfirmationNotice {
    pub fn membership(auto_dismiss_ms: u32) -> Self {
        Self {
            title: "🏎️ Application Submitted!",
            body: "Thank you for your interest in GS Motorsports. We'll review your application and get back to you soon!",
            dismiss_label: "Close",
            auto_dismiss_ms,
        }
    }
}

pub const PANEL_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); \
    background: linear-gradient(45deg, #DC143C, #FF1744); color: white; \
    padding: 2rem; border-radius: 15px; text-align: center; z-index: 10000; \
    font-family: 'Inter', sans-serif; box-shadow: 0 10px 30px rgba(220, 20, 60, 0.5); \
    border: 2px solid #000;";

pub const TITLE_STYLE: &str =
    "font-family: 'Orbitron', monospace; margin-bottom: 1rem; font-size: 1.5rem;";

pub const BODY_STYLE: &str = "margin-bottom: 1rem;";

pub const BUTTON_STYLE: &str = "background: white; color: #DC143C; border: none; \
    padding: 0.8rem 1.5rem; border-radius: 25px; cursor: pointer; font-weight: 600; \
    font-size: 1rem; transition: all 0.3s ease;";

pub const BUTTON_HOVER_TRANSFORM: &str = "scale(1.05)";
pub const BUTTON_REST_TRANSFORM: &str = "scale(1)";

/// Lifecycle of one displayed panel. The close button and the auto-dismiss
/// timer race; whichever runs second finds the panel already gone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeState {
    #[default]
    Shown,
    Dismissed,
}

impl NoticeState {
    /// Returns `true` only for the call that actually dismissed the panel.
    pub fn dismiss(&mut self) -> bool {
        match self {
            NoticeState::Shown => {
                *self = NoticeState::Dismissed;
                true
            }
            NoticeState::Dismissed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_dismiss_is_noop() {
        let mut s = NoticeState::default();
        assert!(s.dismiss());
        assert!(!s.dismiss());
        assert_eq!(s, NoticeState::Dismissed);
    }
}
