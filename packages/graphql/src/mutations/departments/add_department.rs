use super::DepartmentMutationResult;
use crate::errors::{DbError, ValidationErrorType};
use crate::types::department::{DepartmentFields, SavedDepartment};
use crate::{SharedConnection, SharedValidationHelper};
use async_graphql::{Context, Result};
use repositories::DepartmentRepository;
use services::{check_department, DepartmentInput};

const ADDED: &str = "Department added successfully";
const FAILED: &str = "Error adding department";

pub(super) async fn add_department(
    ctx: &Context<'_>,
    department: DepartmentFields,
) -> Result<DepartmentMutationResult> {
    let db = ctx.data::<SharedConnection>()?;
    let helper = ctx.data::<SharedValidationHelper>()?;
    let input = DepartmentInput::from(department);

    let valid = match check_department(helper.as_ref(), &input, None).await {
        Ok(valid) => valid,
        Err(result) => {
            tracing::warn!(errors = %result.to_string_list(), "department rejected");
            return Ok(DepartmentMutationResult::ValidationError(
                ValidationErrorType::new(FAILED, result),
            ));
        }
    };

    match DepartmentRepository::create_department(db, valid).await {
        Ok(d) => {
            tracing::info!(department_id = d.id, "department added");
            Ok(DepartmentMutationResult::SavedDepartment(SavedDepartment {
                message: ADDED.to_string(),
                record: d.into(),
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to insert department");
            Ok(DepartmentMutationResult::DbError(DbError {
                message: FAILED.to_string(),
            }))
        }
    }
}
