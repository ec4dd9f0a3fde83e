use super::EmployeeMutationResult;
use crate::errors::{DbError, ValidationErrorType};
use crate::types::DeletedRecord;
use crate::SharedConnection;
use async_graphql::{Context, Result};
use repositories::employee::EMPLOYEE_NOT_FOUND;
use repositories::EmployeeRepository;

const DELETED: &str = "Employee deleted successfully";
const FAILED: &str = "Error deleting employee";

pub(super) async fn delete_employee(ctx: &Context<'_>, id: i32) -> Result<EmployeeMutationResult> {
    let db = ctx.data::<SharedConnection>()?;

    match EmployeeRepository::delete_employee(db, id).await {
        Ok(id) => {
            tracing::info!(employee_id = id, "employee deleted");
            Ok(EmployeeMutationResult::DeletedRecord(DeletedRecord {
                id,
                message: DELETED.to_string(),
            }))
        }
        Err(e) if e == EMPLOYEE_NOT_FOUND => {
            tracing::warn!(employee_id = id, "employee delete rejected");
            Ok(EmployeeMutationResult::ValidationError(ValidationErrorType {
                message: FAILED.to_string(),
                validation_errors: vec![e],
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, employee_id = id, "failed to delete employee");
            Ok(EmployeeMutationResult::DbError(DbError {
                message: FAILED.to_string(),
            }))
        }
    }
}
