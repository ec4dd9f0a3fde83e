use serde::Serialize;
use std::fmt;

pub const NO_CHANGES_MESSAGE: &str = "No changes detected";

/// Why a create or update was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field failed its format rule
    Format {
        field: &'static str,
        message: String,
    },
    /// The unique field is already held by another record
    Uniqueness(String),
    /// A referenced or edited record does not exist
    NotFound(String),
    /// An edit that would leave the stored record untouched
    NoChange,
    /// The existing records could not be read
    Unverifiable(String),
}

impl ValidationError {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::Format { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Format { message, .. } => f.write_str(message),
            ValidationError::Uniqueness(message) => f.write_str(message),
            ValidationError::NotFound(message) => f.write_str(message),
            ValidationError::NoChange => f.write_str(NO_CHANGES_MESSAGE),
            ValidationError::Unverifiable(message) => f.write_str(message),
        }
    }
}

/// Outcome of validating a department or employee submission.
///
/// Serialises as `{ "valid": .., "validationErrors": [..], "message": .. }`;
/// `message` is only present on the canonical success value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub validation_errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn failure<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        Self {
            valid: false,
            validation_errors: errors.into_iter().map(|e| e.to_string()).collect(),
            message: None,
        }
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.validation_errors.join(", ")
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        ValidationResult::failure([error])
    }
}
