use super::EmployeeMutationResult;
use crate::errors::{DbError, ValidationErrorType};
use crate::types::employee::{EmployeeFields, SavedEmployee};
use crate::{SharedConnection, SharedValidationHelper};
use async_graphql::{Context, Result};
use repositories::EmployeeRepository;
use services::{check_employee, EmployeeInput};

const ADDED: &str = "Employee added successfully";
const FAILED: &str = "Error adding employee";

pub(super) async fn add_employee(
    ctx: &Context<'_>,
    employee: EmployeeFields,
) -> Result<EmployeeMutationResult> {
    let db = ctx.data::<SharedConnection>()?;
    let helper = ctx.data::<SharedValidationHelper>()?;
    let input = EmployeeInput::from(employee);

    let valid = match check_employee(helper.as_ref(), &input, None).await {
        Ok(valid) => valid,
        Err(result) => {
            tracing::warn!(errors = %result.to_string_list(), "employee rejected");
            return Ok(EmployeeMutationResult::ValidationError(
                ValidationErrorType::new(FAILED, result),
            ));
        }
    };

    match EmployeeRepository::create_employee(db, valid).await {
        Ok(e) => {
            tracing::info!(employee_id = e.id, department_id = e.department_id, "employee added");
            Ok(EmployeeMutationResult::SavedEmployee(SavedEmployee {
                message: ADDED.to_string(),
                record: e.into(),
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to insert employee");
            Ok(EmployeeMutationResult::DbError(DbError {
                message: FAILED.to_string(),
            }))
        }
    }
}
