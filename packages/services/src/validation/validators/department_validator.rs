use models::departments;
use serde::Deserialize;

use crate::validation::{
    field_rules::FieldRules,
    helper::{return_success, DuplicateCheck, ExistingRecord, UniqueField, ValidationHelper},
    input_validator::{InputValidator, ValidationErrors},
    validation_result::{ValidationError, ValidationResult},
};

pub const CODE_TAKEN_MESSAGE: &str = "Code taken";
pub const DEPARTMENT_NOT_FOUND_MESSAGE: &str = "Department not found";
pub const DEPARTMENT_UNVERIFIABLE_MESSAGE: &str = "Unable to verify department";

/// A department submission as received; `None` stands for a missing or null field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentInput {
    pub name: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
}

/// A department submission whose fields all passed their rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDepartment {
    pub name: String,
    pub code: String,
    pub location: String,
}

impl ValidDepartment {
    /// Names of the input fields that differ from the stored department.
    pub fn changed_fields(&self, stored: &departments::Model) -> Vec<&'static str> {
        [
            ("name", self.name != stored.name),
            ("code", self.code != stored.code),
            ("location", self.location != stored.location),
        ]
        .into_iter()
        .filter(|(_, changed)| *changed)
        .map(|(field, _)| field)
        .collect()
    }
}

impl InputValidator for DepartmentInput {
    type Valid = ValidDepartment;

    fn validated(&self) -> Result<ValidDepartment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = FieldRules::validate_name(self.name.as_deref(), "name", "Name", &mut errors);
        let code = FieldRules::validate_code(self.code.as_deref(), &mut errors);
        let location = FieldRules::validate_location(self.location.as_deref(), &mut errors);

        match (name, code, location) {
            (Some(name), Some(code), Some(location)) if errors.is_empty() => Ok(ValidDepartment {
                name,
                code,
                location,
            }),
            _ => Err(errors),
        }
    }
}

/// Decide whether a department may be created, or updated when `edit_id` is given,
/// returning the accepted record.
///
/// Checks run in a fixed order and the first failing stage decides the result:
/// field formats (every failing field is reported), code uniqueness, existence
/// of the edited record, then whether the edit changes anything.
pub async fn check_department<H>(
    helper: &H,
    input: &DepartmentInput,
    edit_id: Option<i32>,
) -> Result<ValidDepartment, ValidationResult>
where
    H: ValidationHelper + ?Sized,
{
    let department = match input.validated() {
        Ok(department) => department,
        Err(errors) => return Err(ValidationResult::failure(errors)),
    };

    let existing = match helper.get_departments().await {
        Ok(existing) => existing,
        Err(e) => {
            tracing::error!(error = %e, "failed to load departments for validation");
            return Err(ValidationError::Unverifiable(DEPARTMENT_UNVERIFIABLE_MESSAGE.to_string())
                .into());
        }
    };

    let records: Vec<ExistingRecord> = existing.iter().cloned().map(ExistingRecord::from).collect();
    let duplicate = helper
        .check_for_duplicate(UniqueField::Code, &department.code, &records, edit_id)
        .await;
    if duplicate == DuplicateCheck::Fail {
        return Err(ValidationError::Uniqueness(CODE_TAKEN_MESSAGE.to_string()).into());
    }

    if let Some(id) = edit_id {
        let Some(stored) = existing.iter().find(|d| d.id == id) else {
            return Err(ValidationError::NotFound(DEPARTMENT_NOT_FOUND_MESSAGE.to_string()).into());
        };
        if department.changed_fields(stored).is_empty() {
            return Err(ValidationError::NoChange.into());
        }
    }

    Ok(department)
}

/// [`check_department`] reported as a `ValidationResult`, the canonical success on acceptance.
pub async fn validate_department<H>(
    helper: &H,
    input: &DepartmentInput,
    edit_id: Option<i32>,
) -> ValidationResult
where
    H: ValidationHelper + ?Sized,
{
    match check_department(helper, input, edit_id).await {
        Ok(_) => return_success(),
        Err(result) => result,
    }
}
