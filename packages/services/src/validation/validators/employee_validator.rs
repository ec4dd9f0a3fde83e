use chrono::NaiveDate;
use models::employees;
use serde::Deserialize;
use serde_json::Value;

use crate::validation::{
    field_rules::FieldRules,
    helper::{return_success, DuplicateCheck, ExistingRecord, UniqueField, ValidationHelper},
    input_validator::{InputValidator, ValidationErrors},
    validation_result::{ValidationError, ValidationResult},
};

pub const EMAIL_TAKEN_MESSAGE: &str = "Email address taken";
pub const EMPLOYEE_NOT_FOUND_MESSAGE: &str = "Employee not found";
pub const EMPLOYEE_DEPARTMENT_NOT_FOUND_MESSAGE: &str = "Department not found";
pub const EMPLOYEE_UNVERIFIABLE_MESSAGE: &str = "Unable to verify employee";

/// Input field names and the stored columns they are compared against.
pub const EMPLOYEE_FIELD_MAP: [(&str, &str); 9] = [
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("title", "title"),
    ("email", "email"),
    ("countryCode", "country_code"),
    ("phoneNumber", "phone_number"),
    ("isActive", "is_active"),
    ("departmentId", "department_id"),
    ("hireDate", "hire_date"),
];

/// An employee submission as received.
///
/// `is_active` stays an untyped JSON value so that `"true"` or `1` can be
/// told apart from a real boolean and rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: Option<Value>,
    pub department_id: Option<i32>,
    pub hire_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmployee {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub country_code: String,
    pub phone_number: String,
    pub is_active: bool,
    pub department_id: i32,
    pub hire_date: NaiveDate,
}

impl ValidEmployee {
    /// Input field names (see [`EMPLOYEE_FIELD_MAP`]) whose value differs from the stored row.
    pub fn changed_fields(&self, stored: &employees::Model) -> Vec<&'static str> {
        let differs = [
            self.first_name != stored.first_name,
            self.last_name != stored.last_name,
            self.title != stored.title,
            self.email != stored.email,
            self.country_code != stored.country_code,
            self.phone_number != stored.phone_number,
            self.is_active != stored.is_active,
            self.department_id != stored.department_id,
            self.hire_date != stored.hire_date,
        ];

        EMPLOYEE_FIELD_MAP
            .iter()
            .zip(differs)
            .filter(|(_, changed)| *changed)
            .map(|((field, _), _)| *field)
            .collect()
    }
}

impl InputValidator for EmployeeInput {
    type Valid = ValidEmployee;

    fn validated(&self) -> Result<ValidEmployee, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = FieldRules::validate_name(
            self.first_name.as_deref(),
            "firstName",
            "First name",
            &mut errors,
        );
        let last_name = FieldRules::validate_name(
            self.last_name.as_deref(),
            "lastName",
            "Last name",
            &mut errors,
        );
        let title = FieldRules::validate_name(self.title.as_deref(), "title", "Title", &mut errors);
        let email = FieldRules::validate_email(self.email.as_deref(), &mut errors);
        let country_code = FieldRules::validate_country_code(self.country_code.as_deref(), &mut errors);
        let phone_number = FieldRules::validate_phone_number(self.phone_number.as_deref(), &mut errors);
        let is_active = FieldRules::validate_active(self.is_active.as_ref(), &mut errors);
        let department_id = FieldRules::validate_department_id(self.department_id, &mut errors);
        let hire_date = FieldRules::validate_hire_date(self.hire_date.as_deref(), &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        match (
            first_name,
            last_name,
            title,
            email,
            country_code,
            phone_number,
            is_active,
            department_id,
            hire_date,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(title),
                Some(email),
                Some(country_code),
                Some(phone_number),
                Some(is_active),
                Some(department_id),
                Some(hire_date),
            ) => Ok(ValidEmployee {
                first_name,
                last_name,
                title,
                email,
                country_code,
                phone_number,
                is_active,
                department_id,
                hire_date,
            }),
            _ => Err(errors),
        }
    }
}

/// Decide whether an employee may be created, or updated when `edit_id` is given,
/// returning the accepted record.
///
/// Order: field formats, email uniqueness, the referenced department, the
/// edited record, then change detection.
pub async fn check_employee<H>(
    helper: &H,
    input: &EmployeeInput,
    edit_id: Option<i32>,
) -> Result<ValidEmployee, ValidationResult>
where
    H: ValidationHelper + ?Sized,
{
    let employee = match input.validated() {
        Ok(employee) => employee,
        Err(errors) => return Err(ValidationResult::failure(errors)),
    };

    let existing = match helper.get_employees().await {
        Ok(existing) => existing,
        Err(e) => {
            tracing::error!(error = %e, "failed to load employees for validation");
            return Err(ValidationError::Unverifiable(EMPLOYEE_UNVERIFIABLE_MESSAGE.to_string()).into());
        }
    };

    let records: Vec<ExistingRecord> = existing.iter().cloned().map(ExistingRecord::from).collect();
    let duplicate = helper
        .check_for_duplicate(UniqueField::Email, &employee.email, &records, edit_id)
        .await;
    if duplicate == DuplicateCheck::Fail {
        return Err(ValidationError::Uniqueness(EMAIL_TAKEN_MESSAGE.to_string()).into());
    }

    let departments = match helper.get_departments().await {
        Ok(departments) => departments,
        Err(e) => {
            tracing::error!(error = %e, "failed to load departments for employee validation");
            return Err(ValidationError::Unverifiable(EMPLOYEE_UNVERIFIABLE_MESSAGE.to_string()).into());
        }
    };
    if !departments.iter().any(|d| d.id == employee.department_id) {
        return Err(ValidationError::NotFound(EMPLOYEE_DEPARTMENT_NOT_FOUND_MESSAGE.to_string()).into());
    }

    if let Some(id) = edit_id {
        let Some(stored) = existing.iter().find(|e| e.id == id) else {
            return Err(ValidationError::NotFound(EMPLOYEE_NOT_FOUND_MESSAGE.to_string()).into());
        };
        if employee.changed_fields(stored).is_empty() {
            return Err(ValidationError::NoChange.into());
        }
    }

    Ok(employee)
}

/// [`check_employee`] reported as a `ValidationResult`, the canonical success on acceptance.
pub async fn validate_employee<H>(
    helper: &H,
    input: &EmployeeInput,
    edit_id: Option<i32>,
) -> ValidationResult
where
    H: ValidationHelper + ?Sized,
{
    match check_employee(helper, input, edit_id).await {
        Ok(_) => return_success(),
        Err(result) => result,
    }
}
