//! Fixtures and mock builders shared by the workspace's test suites.

use chrono::NaiveDate;
use models::{departments, employees};
use serde_json::json;

use crate::validation::helper::{DuplicateCheck, MockValidationHelper};
use crate::validation::validators::department_validator::DepartmentInput;
use crate::validation::validators::employee_validator::EmployeeInput;

pub fn department(id: i32, name: &str, code: &str, location: &str) -> departments::Model {
    departments::Model {
        id,
        name: name.to_string(),
        code: code.to_string(),
        location: location.to_string(),
    }
}

pub fn existing_departments() -> Vec<departments::Model> {
    vec![
        department(1, "IT", "IT1", "New York"),
        department(2, "HR", "HR1", "San Francisco"),
    ]
}

pub fn existing_employees() -> Vec<employees::Model> {
    vec![
        employees::Model {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            title: "Developer".to_string(),
            email: "john.doe@example.com".to_string(),
            country_code: "1".to_string(),
            phone_number: "1234567890".to_string(),
            is_active: true,
            department_id: 1,
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        },
        employees::Model {
            id: 2,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            title: "Manager".to_string(),
            email: "jane.smith@example.com".to_string(),
            country_code: "44".to_string(),
            phone_number: "9876543210".to_string(),
            is_active: true,
            department_id: 2,
            hire_date: NaiveDate::from_ymd_opt(2022, 6, 15).unwrap(),
        },
    ]
}

pub fn department_input() -> DepartmentInput {
    DepartmentInput {
        name: Some("IT".to_string()),
        code: Some("IT1".to_string()),
        location: Some("New York".to_string()),
    }
}

pub fn employee_input() -> EmployeeInput {
    EmployeeInput {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        title: Some("Developer".to_string()),
        email: Some("john.doe@example.com".to_string()),
        country_code: Some("1".to_string()),
        phone_number: Some("1234567890".to_string()),
        is_active: Some(json!(true)),
        department_id: Some(1),
        hire_date: Some("2023-01-01".to_string()),
    }
}

/// A helper serving the fixture records whose duplicate check answers `duplicate`.
pub fn mock_helper(duplicate: DuplicateCheck) -> MockValidationHelper {
    let mut helper = MockValidationHelper::new();
    helper
        .expect_get_departments()
        .returning(|| Ok(existing_departments()));
    helper
        .expect_get_employees()
        .returning(|| Ok(existing_employees()));
    helper
        .expect_check_for_duplicate()
        .returning(move |_, _, _, _| duplicate);
    helper
}

/// A helper that must not be consulted at all.
pub fn untouched_helper() -> MockValidationHelper {
    let mut helper = MockValidationHelper::new();
    helper.expect_get_departments().never();
    helper.expect_get_employees().never();
    helper.expect_check_for_duplicate().never();
    helper
}
