use async_trait::async_trait;
use models::{departments, employees};
use std::fmt;

use super::validation_result::ValidationResult;

#[derive(Debug)]
pub struct StoreError {
    pub message: String,
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        StoreError {
            message: e.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateCheck {
    Pass,
    Fail,
}

/// Fields that must be unique across their collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Code,
    Email,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Code => "code",
            UniqueField::Email => "email",
        }
    }

    fn matches(&self, stored: &str, candidate: &str) -> bool {
        match self {
            UniqueField::Code => stored == candidate,
            UniqueField::Email => stored.eq_ignore_ascii_case(candidate),
        }
    }
}

/// A persisted record used as the baseline for uniqueness checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ExistingRecord {
    Department(departments::Model),
    Employee(employees::Model),
}

impl ExistingRecord {
    pub fn id(&self) -> i32 {
        match self {
            ExistingRecord::Department(d) => d.id,
            ExistingRecord::Employee(e) => e.id,
        }
    }

    pub fn value_of(&self, field: UniqueField) -> Option<&str> {
        match (self, field) {
            (ExistingRecord::Department(d), UniqueField::Code) => Some(d.code.as_str()),
            (ExistingRecord::Employee(e), UniqueField::Email) => Some(e.email.as_str()),
            _ => None,
        }
    }
}

impl From<departments::Model> for ExistingRecord {
    fn from(model: departments::Model) -> Self {
        ExistingRecord::Department(model)
    }
}

impl From<employees::Model> for ExistingRecord {
    fn from(model: employees::Model) -> Self {
        ExistingRecord::Employee(model)
    }
}

/// `Fail` when a record other than `exclude_id` already holds `value`.
pub fn find_duplicate(
    field: UniqueField,
    value: &str,
    records: &[ExistingRecord],
    exclude_id: Option<i32>,
) -> DuplicateCheck {
    let taken = records
        .iter()
        .filter(|record| Some(record.id()) != exclude_id)
        .filter_map(|record| record.value_of(field))
        .any(|stored| field.matches(stored, value));

    if taken {
        DuplicateCheck::Fail
    } else {
        DuplicateCheck::Pass
    }
}

/// The canonical success result.
pub fn return_success() -> ValidationResult {
    ValidationResult {
        valid: true,
        validation_errors: Vec::new(),
        message: Some(String::new()),
    }
}

/// Read access to the records validation compares against.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ValidationHelper: Send + Sync {
    async fn get_departments(&self) -> Result<Vec<departments::Model>, StoreError>;

    async fn get_employees(&self) -> Result<Vec<employees::Model>, StoreError>;

    async fn check_for_duplicate(
        &self,
        field: UniqueField,
        value: &str,
        records: &[ExistingRecord],
        exclude_id: Option<i32>,
    ) -> DuplicateCheck {
        find_duplicate(field, value, records, exclude_id)
    }
}
