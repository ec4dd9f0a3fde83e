use crate::errors::{DbError, ValidationErrorType};
use crate::types::employee::{EmployeeFields, SavedEmployee};
use crate::types::DeletedRecord;
use async_graphql::{Context, Object, Result, Union};

mod add_employee;
mod delete_employee;
mod edit_employee;

#[derive(Union)]
pub enum EmployeeMutationResult {
    SavedEmployee(SavedEmployee),
    DeletedRecord(DeletedRecord),
    ValidationError(ValidationErrorType),
    DbError(DbError),
}

#[derive(Default)]
pub struct EmployeeMutation;

#[Object]
impl EmployeeMutation {
    async fn add_employee(
        &self,
        ctx: &Context<'_>,
        employee: EmployeeFields,
    ) -> Result<EmployeeMutationResult> {
        add_employee::add_employee(ctx, employee).await
    }

    async fn edit_employee(
        &self,
        ctx: &Context<'_>,
        id: i32,
        employee: EmployeeFields,
    ) -> Result<EmployeeMutationResult> {
        edit_employee::edit_employee(ctx, id, employee).await
    }

    async fn delete_employee(&self, ctx: &Context<'_>, id: i32) -> Result<EmployeeMutationResult> {
        delete_employee::delete_employee(ctx, id).await
    }
}
