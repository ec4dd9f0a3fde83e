use super::DepartmentMutationResult;
use crate::errors::{DbError, ValidationErrorType};
use crate::types::DeletedRecord;
use crate::SharedConnection;
use async_graphql::{Context, Result};
use repositories::department::{DEPARTMENT_HAS_EMPLOYEES, DEPARTMENT_NOT_FOUND};
use repositories::DepartmentRepository;

const DELETED: &str = "Department deleted successfully";
const FAILED: &str = "Error deleting department";

pub(super) async fn delete_department(
    ctx: &Context<'_>,
    id: i32,
) -> Result<DepartmentMutationResult> {
    let db = ctx.data::<SharedConnection>()?;

    match DepartmentRepository::delete_department(db, id).await {
        Ok(id) => {
            tracing::info!(department_id = id, "department deleted");
            Ok(DepartmentMutationResult::DeletedRecord(DeletedRecord {
                id,
                message: DELETED.to_string(),
            }))
        }
        Err(e) if e == DEPARTMENT_NOT_FOUND || e == DEPARTMENT_HAS_EMPLOYEES => {
            tracing::warn!(department_id = id, reason = %e, "department delete rejected");
            Ok(DepartmentMutationResult::ValidationError(ValidationErrorType {
                message: FAILED.to_string(),
                validation_errors: vec![e],
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, department_id = id, "failed to delete department");
            Ok(DepartmentMutationResult::DbError(DbError {
                message: FAILED.to_string(),
            }))
        }
    }
}
