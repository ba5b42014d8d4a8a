//! Request Validation
//!
//! Pure, framework-independent validation for request bodies. Every endpoint
//! declares its fields and rules in order; the outcome is an ordered list of
//! [`FieldError`]s. Handlers report only the first one, so declaration order
//! decides which message a client sees.
//!
//! # Usage
//!
//! ```rust
//! use board::shared::validation::{field, ValidationErrors};
//!
//! let title = Some("hello");
//! let result = ValidationErrors::check([
//!     field("title", title).required("제목을 입력해주세요.").max_chars(255, "too long"),
//! ]);
//! assert!(result.is_ok());
//! ```
//!
//! Rules other than `required` are skipped when the value is absent, so a
//! missing field yields only its `required` message.

use std::fmt;
use validator::ValidateEmail;

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Request field name as it appears on the wire
    pub field: &'static str,
    /// Localized, user-facing message
    pub message: &'static str,
}

/// Ordered list of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first_message().unwrap_or("validation failed"))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    /// Evaluate fields in order and collect the first failure of each
    pub fn check<'a, I>(fields: I) -> Result<(), ValidationErrors>
    where
        I: IntoIterator<Item = Field<'a>>,
    {
        let errors: Vec<FieldError> = fields
            .into_iter()
            .filter_map(|f| {
                f.failure.map(|message| FieldError {
                    field: f.name,
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    /// The failure that decides the response message
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn first_message(&self) -> Option<&'static str> {
        self.first().map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// One request field and the first rule it failed, if any
///
/// Rules are chained; once a rule fails the remaining rules for that field
/// are not evaluated.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    name: &'static str,
    value: Option<&'a str>,
    failure: Option<&'static str>,
}

/// Start a rule chain for `name`
pub fn field<'a>(name: &'static str, value: Option<&'a str>) -> Field<'a> {
    Field {
        name,
        value,
        failure: None,
    }
}

impl<'a> Field<'a> {
    fn rule(mut self, passes: impl FnOnce(&str) -> bool, message: &'static str) -> Self {
        if self.failure.is_none() {
            if let Some(value) = self.value {
                if !passes(value) {
                    self.failure = Some(message);
                }
            }
        }
        self
    }

    /// Value must be present and not blank
    pub fn required(mut self, message: &'static str) -> Self {
        if self.failure.is_none() && self.value.map_or(true, |v| v.trim().is_empty()) {
            self.failure = Some(message);
        }
        self
    }

    /// At least `min` characters (Unicode scalar values)
    pub fn min_chars(self, min: usize, message: &'static str) -> Self {
        self.rule(|v| v.chars().count() >= min, message)
    }

    /// At most `max` characters (Unicode scalar values)
    pub fn max_chars(self, max: usize, message: &'static str) -> Self {
        self.rule(|v| v.chars().count() <= max, message)
    }

    /// Syntactically valid email address
    pub fn email(self, message: &'static str) -> Self {
        self.rule(|v| v.validate_email(), message)
    }

    /// Byte-for-byte equal to another field's value
    pub fn same_as(self, other: Option<&str>, message: &'static str) -> Self {
        self.rule(|v| other == Some(v), message)
    }

    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Normalize a text input: trim it, and treat an empty result as absent
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalize a secret input: never trimmed, empty treated as absent
pub fn normalize_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
