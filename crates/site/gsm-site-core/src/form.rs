//! Membership application collection and validation.
//!
//! Validation is pure: it never touches the page. The adapter decides how to
//! show the failures (the site shows the first one inline).

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fields that must be non-blank, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "phone", "major"];

/// Checkbox acknowledging the safety orientation.
pub const SAFETY_FIELD: &str = "safety";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// ASCII digits only; `\d` would also admit other scripts' digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s()+-]{10,}$").expect("phone pattern compiles"));

/// Why an application was rejected. `Display` is the message shown to the applicant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please fill in the {field} field.")]
    MissingField { field: String },

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    #[error("You must agree to complete the safety orientation program.")]
    SafetyNotAcknowledged,
}

impl ValidationError {
    /// Name of the form field the failure is about.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field,
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::SafetyNotAcknowledged => SAFETY_FIELD,
        }
    }
}

/// Field values captured at submit time. Later values for a repeated name
/// replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    fields: IndexMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Present and not just whitespace.
    pub fn has_text(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// Present and non-empty, the way an unchecked checkbox is absent.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build from a loosely typed JSON object, as handed over by script callers.
    ///
    /// Strings are kept verbatim, numbers are stringified, `true` becomes
    /// `"on"` (a checked checkbox) and `false`/`null`/nested values are
    /// treated as absent.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        use serde_json::Value;
        object
            .iter()
            .filter_map(|(k, v)| {
                let value = match v {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(true) => "on".to_string(),
                    _ => return None,
                };
                Some((k.clone(), value))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormSubmission::new();
        for (k, v) in iter {
            form.insert(k, v);
        }
        form
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Every failure, in rule order.
///
/// Only the first missing required field is listed; the format checks for
/// email and phone run only when no required field is missing, so a blank
/// email is never also reported as malformed.
pub fn validate_all(form: &FormSubmission) -> Vec<ValidationError> {
    if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !form.has_text(f)) {
        let mut out = vec![ValidationError::MissingField {
            field: (*field).to_string(),
        }];
        if !form.is_truthy(SAFETY_FIELD) {
            out.push(ValidationError::SafetyNotAcknowledged);
        }
        return out;
    }

    let mut out = Vec::new();
    if !is_valid_email(form.get("email").unwrap_or_default()) {
        out.push(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(form.get("phone").unwrap_or_default()) {
        out.push(ValidationError::InvalidPhone);
    }
    if !form.is_truthy(SAFETY_FIELD) {
        out.push(ValidationError::SafetyNotAcknowledged);
    }
    out
}

/// The failure reported to the applicant: the first rule that fails.
pub fn validate(form: &FormSubmission) -> Result<(), ValidationError> {
    match validate_all(form).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_a_dot_after_the_at() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn phone_allows_punctuation() {
        assert!(!is_valid_phone("123"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 555 123 4567"));
        assert!(!is_valid_phone("555-123-456x"));
    }

    #[test]
    fn loose_json_objects() {
        let obj = serde_json::json!({
            "name": "Sam",
            "phone": 5551234567u64,
            "safety": true,
            "newsletter": false,
            "extra": null,
        });
        let form = FormSubmission::from_json_object(obj.as_object().unwrap());
        assert_eq!(form.get("phone"), Some("5551234567"));
        assert_eq!(form.get("safety"), Some("on"));
        assert_eq!(form.get("newsletter"), None);
        assert_eq!(form.get("extra"), None);
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn field_names_follow_the_failure() {
        assert_eq!(ValidationError::InvalidPhone.field(), "phone");
        assert_eq!(
            ValidationError::MissingField {
                field: "major".into()
            }
            .to_string(),
            "Please fill in the major field."
        );
    }
}
