use crate::errors::{DbError, ValidationErrorType};
use crate::types::department::{DepartmentFields, SavedDepartment};
use crate::types::DeletedRecord;
use async_graphql::{Context, Object, Result, Union};

mod add_department;
mod delete_department;
mod edit_department;

#[derive(Union)]
pub enum DepartmentMutationResult {
    SavedDepartment(SavedDepartment),
    DeletedRecord(DeletedRecord),
    ValidationError(ValidationErrorType),
    DbError(DbError),
}

#[derive(Default)]
pub struct DepartmentMutation;

#[Object]
impl DepartmentMutation {
    async fn add_department(
        &self,
        ctx: &Context<'_>,
        department: DepartmentFields,
    ) -> Result<DepartmentMutationResult> {
        add_department::add_department(ctx, department).await
    }

    async fn edit_department(
        &self,
        ctx: &Context<'_>,
        id: i32,
        department: DepartmentFields,
    ) -> Result<DepartmentMutationResult> {
        edit_department::edit_department(ctx, id, department).await
    }

    async fn delete_department(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<DepartmentMutationResult> {
        delete_department::delete_department(ctx, id).await
    }
}
