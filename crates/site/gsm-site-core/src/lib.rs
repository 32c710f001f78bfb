//! GS Motorsports site core (DOM-agnostic)
//!
//! Every decision the page makes lives here: when the navigation bar is
//! "scrolled", where an anchor click should scroll to, how a statistic counter
//! advances each frame, whether a membership application is valid, and which
//! state the mobile menu is in. The wasm adapter only reads the DOM, calls into
//! these types, and writes the result back.

pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod intro;
pub mod menu;
pub mod nav;
pub mod notice;
pub mod observer;
pub mod scroll;
pub mod state;

// Re-exports for consumers (adapters)
pub use config::{ObserverOptions, SiteConfig};
pub use counter::{CounterAnimation, CounterFrame};
pub use error::{Result, SiteError};
pub use form::{FormSubmission, ValidationError};
pub use intro::{IntroStep, BRANDING};
pub use menu::{BarStyle, MenuState};
pub use nav::{NavUpdate, ScrollState};
pub use notice::{ConfirmationNotice, NoticeState};
pub use observer::{OneShotObserver, RevealState, VisibilityObserver};
pub use state::SiteState;
