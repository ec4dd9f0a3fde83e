use super::validation_result::ValidationError;

/// Field failures in the order the rules ran.
pub type ValidationErrors = Vec<ValidationError>;

pub trait InputValidator {
    /// The typed record produced when every field rule passes.
    type Valid;

    fn validated(&self) -> Result<Self::Valid, ValidationErrors>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validated().map(|_| ())
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for collecting validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &'static str, message: String);
    fn messages(&self) -> Vec<String>;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &'static str, message: String) {
        self.push(ValidationError::Format { field, message });
    }

    fn messages(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}
