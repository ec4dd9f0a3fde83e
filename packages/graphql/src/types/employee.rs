use async_graphql::{InputObject, Json, SimpleObject};
use chrono::NaiveDate;
use models::employees;
use serde_json::Value;
use services::EmployeeInput;

#[derive(SimpleObject, Clone, Debug)]
pub struct Employee {
    pub id: i32,
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

impl From<employees::Model> for Employee {
    fn from(e: employees::Model) -> Self {
        Employee {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            title: e.title,
            email: e.email,
            country_code: e.country_code,
            phone_number: e.phone_number,
            is_active: e.is_active,
            department_id: e.department_id,
            hire_date: e.hire_date,
        }
    }
}

#[derive(SimpleObject)]
pub struct SavedEmployee {
    pub message: String,
    pub record: Employee,
}

/// Employee fields as submitted. `isActive` accepts any JSON value so that
/// strings and numbers reach validation and are rejected there.
#[derive(InputObject, Default)]
#[graphql(name = "EmployeeInput")]
pub struct EmployeeFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: Option<Json<Value>>,
    pub department_id: Option<i32>,
    pub hire_date: Option<String>,
}

impl From<EmployeeFields> for EmployeeInput {
    fn from(fields: EmployeeFields) -> Self {
        EmployeeInput {
            first_name: fields.first_name,
            last_name: fields.last_name,
            title: fields.title,
            email: fields.email,
            country_code: fields.country_code,
            phone_number: fields.phone_number,
            is_active: fields.is_active.map(|Json(value)| value),
            department_id: fields.department_id,
            hire_date: fields.hire_date,
        }
    }
}
