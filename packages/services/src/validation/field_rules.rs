use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use super::input_validator::{ValidationErrors, ValidationErrorsExt};

pub const NAME_MAX_LEN: usize = 100;
pub const CODE_MAX_LEN: usize = 20;
pub const LOCATION_MIN_LEN: usize = 3;
pub const EMAIL_MAX_LEN: usize = 254;
pub const COUNTRY_CODE_MAX_LEN: usize = 4;
pub const PHONE_MIN_LEN: usize = 5;
pub const PHONE_MAX_LEN: usize = 15;

pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Cities a department may be located in.
pub const VALID_LOCATIONS: [&str; 10] = [
    "New York",
    "London",
    "San Francisco",
    "Tokyo",
    "Paris",
    "Berlin",
    "Sydney",
    "Toronto",
    "Singapore",
    "Dubai",
];

pub const CODE_MESSAGE: &str = "Code must be 1-20 uppercase letters or numbers";
pub const LOCATION_MESSAGE: &str = "Location must be a valid city";
pub const EMAIL_MESSAGE: &str = "Invalid email address";
pub const COUNTRY_CODE_MESSAGE: &str = "Country code must be 1-4 digits";
pub const PHONE_MESSAGE: &str = "Phone number must be 5-15 digits";
pub const ACTIVE_MESSAGE: &str = "Active status must be true or false";
pub const DEPARTMENT_MESSAGE: &str = "Department is required";
pub const HIRE_DATE_MESSAGE: &str = "Hire date must be a valid date (YYYY-MM-DD)";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} '\-]+$").expect("valid regex"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,20}$").expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("valid regex")
});
static COUNTRY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,4}$").expect("valid regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,15}$").expect("valid regex"));

/// Present and not just whitespace.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn is_name(value: Option<&str>) -> bool {
    present(value)
        .map(|v| v.chars().count() <= NAME_MAX_LEN && NAME_RE.is_match(v))
        .unwrap_or(false)
}

pub fn is_department_code(value: Option<&str>) -> bool {
    present(value)
        .map(|v| v.len() <= CODE_MAX_LEN && CODE_RE.is_match(v))
        .unwrap_or(false)
}

pub fn is_location(value: Option<&str>) -> bool {
    present(value)
        .map(|v| v.chars().count() >= LOCATION_MIN_LEN && VALID_LOCATIONS.contains(&v))
        .unwrap_or(false)
}

pub fn is_email(value: Option<&str>) -> bool {
    present(value)
        .map(|v| v.len() <= EMAIL_MAX_LEN && EMAIL_RE.is_match(v))
        .unwrap_or(false)
}

pub fn is_country_code(value: Option<&str>) -> bool {
    present(value)
        .map(|v| v.len() <= COUNTRY_CODE_MAX_LEN && COUNTRY_CODE_RE.is_match(v))
        .unwrap_or(false)
}

pub fn is_phone_number(value: Option<&str>) -> bool {
    present(value)
        .map(|v| (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&v.len()) && PHONE_RE.is_match(v))
        .unwrap_or(false)
}

/// Only a JSON boolean literal counts; `"true"`, `1` and friends do not.
pub fn active_flag(value: Option<&Value>) -> Option<bool> {
    match value {
        Some(Value::Bool(flag)) => Some(*flag),
        _ => None,
    }
}

pub fn department_reference(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id > 0)
}

pub fn hire_date(value: Option<&str>) -> Option<NaiveDate> {
    present(value).and_then(|v| NaiveDate::parse_from_str(v.trim(), HIRE_DATE_FORMAT).ok())
}

/// Per-field rules that record a failure message against the field name.
///
/// Each `validate_*` returns the accepted value so callers can assemble a
/// typed record once every rule has run.
pub struct FieldRules;

impl FieldRules {
    pub fn validate_name(
        value: Option<&str>,
        field: &'static str,
        label: &str,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        if is_name(value) {
            return value.map(str::to_string);
        }
        errors.add_error(
            field,
            format!("{label} must be 1-100 letters, numbers, spaces, hyphens or apostrophes"),
        );
        None
    }

    pub fn validate_code(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
        Self::check(is_department_code(value), value, "code", CODE_MESSAGE, errors)
    }

    pub fn validate_location(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
        Self::check(is_location(value), value, "location", LOCATION_MESSAGE, errors)
    }

    pub fn validate_email(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
        Self::check(is_email(value), value, "email", EMAIL_MESSAGE, errors)
    }

    pub fn validate_country_code(
        value: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        Self::check(
            is_country_code(value),
            value,
            "countryCode",
            COUNTRY_CODE_MESSAGE,
            errors,
        )
    }

    pub fn validate_phone_number(
        value: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        Self::check(is_phone_number(value), value, "phoneNumber", PHONE_MESSAGE, errors)
    }

    pub fn validate_active(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<bool> {
        let flag = active_flag(value);
        if flag.is_none() {
            errors.add_error("isActive", ACTIVE_MESSAGE.to_string());
        }
        flag
    }

    pub fn validate_department_id(
        value: Option<i32>,
        errors: &mut ValidationErrors,
    ) -> Option<i32> {
        let id = department_reference(value);
        if id.is_none() {
            errors.add_error("departmentId", DEPARTMENT_MESSAGE.to_string());
        }
        id
    }

    pub fn validate_hire_date(
        value: Option<&str>,
        errors: &mut ValidationErrors,
    ) -> Option<NaiveDate> {
        let date = hire_date(value);
        if date.is_none() {
            errors.add_error("hireDate", HIRE_DATE_MESSAGE.to_string());
        }
        date
    }

    fn check(
        passed: bool,
        value: Option<&str>,
        field: &'static str,
        message: &str,
        errors: &mut ValidationErrors,
    ) -> Option<String> {
        if passed {
            value.map(str::to_string)
        } else {
            errors.add_error(field, message.to_string());
            None
        }
    }
}
