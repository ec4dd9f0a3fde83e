use models::employees;
use sea_orm::*;
use std::collections::BTreeMap;

pub use services::testing::{department, existing_employees};

/// John Doe from the shared fixtures under a different id, name, email and department.
pub fn employee(id: i32, first_name: &str, email: &str, department_id: i32) -> employees::Model {
    let mut employee = existing_employees().remove(0);
    employee.id = id;
    employee.first_name = first_name.to_string();
    employee.email = email.to_string();
    employee.department_id = department_id;
    employee
}

/// The row a `count()` query yields on Postgres.
pub fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

pub fn deleted_one() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}
