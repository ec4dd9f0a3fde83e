use std::collections::BTreeMap;
use std::sync::Arc;

use sea_orm::*;
use services::MockValidationHelper;

pub use services::testing::{
    department, existing_departments, existing_employees, mock_helper, untouched_helper,
};

use crate::{build_schema, WorkforceSchema};

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn create_test_schema(db: DatabaseConnection, helper: MockValidationHelper) -> WorkforceSchema {
    build_schema(Arc::new(db), Arc::new(helper))
}

pub fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

pub fn deleted_one() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}
