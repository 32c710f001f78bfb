//! Error types for the site controllers

/// Errors raised while wiring or driving page behaviour.
///
/// None of these are fatal: adapters log them and leave the affected feature
/// inactive. Validation failures are a separate type, see
/// [`crate::form::ValidationError`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SiteError {
    /// An element the markup contract names is absent
    #[error("Element not found: {selector}")]
    MissingElement { selector: String },

    /// A counter's `data-target` attribute is absent or not an integer
    #[error("Invalid counter target {raw:?}: {reason}")]
    InvalidCounterTarget { raw: String, reason: String },

    /// Configuration could not be parsed or is out of range
    #[error("Config error: {reason}")]
    Config { reason: String },

    /// A browser API call threw
    #[error("DOM error: {reason}")]
    Dom { reason: String },
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    pub fn dom(reason: impl Into<String>) -> Self {
        Self::Dom {
            reason: reason.into(),
        }
    }

    /// Missing-target errors are silently tolerated; everything else is worth a warning.
    #[inline]
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingElement { .. } => "markup",
            Self::InvalidCounterTarget { .. } => "counter",
            Self::Config { .. } => "config",
            Self::Dom { .. } => "dom",
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

/// Site core result type
pub type Result<T> = core::result::Result<T, SiteError>;
