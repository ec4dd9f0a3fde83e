use async_graphql::SimpleObject;
use services::ValidationResult;
use std::fmt;

#[derive(SimpleObject, Debug)]
pub struct DbError {
    pub message: String,
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
    pub validation_errors: Vec<String>,
}

impl ValidationErrorType {
    pub fn new(message: &str, result: ValidationResult) -> Self {
        ValidationErrorType {
            message: message.to_string(),
            validation_errors: result.validation_errors,
        }
    }
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.validation_errors.join(", "))
    }
}
