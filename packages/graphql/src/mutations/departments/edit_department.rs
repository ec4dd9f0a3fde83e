use super::DepartmentMutationResult;
use crate::errors::{DbError, ValidationErrorType};
use crate::types::department::{DepartmentFields, SavedDepartment};
use crate::{SharedConnection, SharedValidationHelper};
use async_graphql::{Context, Result};
use repositories::DepartmentRepository;
use services::{check_department, DepartmentInput};

const EDITED: &str = "Department edited successfully";
const FAILED: &str = "Error editing department";

pub(super) async fn edit_department(
    ctx: &Context<'_>,
    id: i32,
    department: DepartmentFields,
) -> Result<DepartmentMutationResult> {
    let db = ctx.data::<SharedConnection>()?;
    let helper = ctx.data::<SharedValidationHelper>()?;
    let input = DepartmentInput::from(department);

    let valid = match check_department(helper.as_ref(), &input, Some(id)).await {
        Ok(valid) => valid,
        Err(result) => {
            tracing::warn!(department_id = id, errors = %result.to_string_list(), "department edit rejected");
            return Ok(DepartmentMutationResult::ValidationError(
                ValidationErrorType::new(FAILED, result),
            ));
        }
    };

    match DepartmentRepository::update_department(db, id, valid).await {
        Ok(d) => {
            tracing::info!(department_id = d.id, "department edited");
            Ok(DepartmentMutationResult::SavedDepartment(SavedDepartment {
                message: EDITED.to_string(),
                record: d.into(),
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, department_id = id, "failed to update department");
            Ok(DepartmentMutationResult::DbError(DbError {
                message: FAILED.to_string(),
            }))
        }
    }
}
