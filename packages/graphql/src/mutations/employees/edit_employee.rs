use super::EmployeeMutationResult;
use crate::errors::{DbError, ValidationErrorType};
use crate::types::employee::{EmployeeFields, SavedEmployee};
use crate::{SharedConnection, SharedValidationHelper};
use async_graphql::{Context, Result};
use repositories::EmployeeRepository;
use services::{check_employee, EmployeeInput};

const EDITED: &str = "Employee edited successfully";
const FAILED: &str = "Error editing employee";

pub(super) async fn edit_employee(
    ctx: &Context<'_>,
    id: i32,
    employee: EmployeeFields,
) -> Result<EmployeeMutationResult> {
    let db = ctx.data::<SharedConnection>()?;
    let helper = ctx.data::<SharedValidationHelper>()?;
    let input = EmployeeInput::from(employee);

    let valid = match check_employee(helper.as_ref(), &input, Some(id)).await {
        Ok(valid) => valid,
        Err(result) => {
            tracing::warn!(employee_id = id, errors = %result.to_string_list(), "employee edit rejected");
            return Ok(EmployeeMutationResult::ValidationError(
                ValidationErrorType::new(FAILED, result),
            ));
        }
    };

    match EmployeeRepository::update_employee(db, id, valid).await {
        Ok(e) => {
            tracing::info!(employee_id = e.id, "employee edited");
            Ok(EmployeeMutationResult::SavedEmployee(SavedEmployee {
                message: EDITED.to_string(),
                record: e.into(),
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, employee_id = id, "failed to update employee");
            Ok(EmployeeMutationResult::DbError(DbError {
                message: FAILED.to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use sea_orm::DbErr;
    use services::DuplicateCheck;

    fn edit_query(title: &str) -> String {
        format!(
            r#"mutation {{
                editEmployee(id: 1, employee: {{
                    firstName: "John", lastName: "Doe", title: "{title}",
                    email: "john.doe@example.com", countryCode: "1",
                    phoneNumber: "1234567890", isActive: true,
                    departmentId: 1, hireDate: "2023-01-01"
                }}) {{
                    ... on SavedEmployee {{ message record {{ title }} }}
                    ... on ValidationErrorType {{ message validationErrors }}
                    ... on DbError {{ message }}
                }}
            }}"#
        )
    }

    #[tokio::test]
    async fn test_edit_employee_saves_changes() {
        let mut promoted = existing_employees().remove(0);
        promoted.title = "Lead".into();
        let db = mock_db()
            .append_query_results([vec![existing_employees().remove(0)], vec![promoted]])
            .into_connection();
        let schema = create_test_schema(db, mock_helper(DuplicateCheck::Pass));

        let res = schema.execute(Request::new(edit_query("Lead"))).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["editEmployee"]["message"], "Employee edited successfully");
        assert_eq!(data["editEmployee"]["record"]["title"], "Lead");
    }

    #[tokio::test]
    async fn test_edit_employee_without_changes_is_rejected() {
        let schema = create_test_schema(mock_db().into_connection(), mock_helper(DuplicateCheck::Pass));

        let res = schema.execute(Request::new(edit_query("Developer"))).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["editEmployee"]["message"], "Error editing employee");
        assert_eq!(
            data["editEmployee"]["validationErrors"],
            serde_json::json!(["No changes detected"])
        );
    }

    #[tokio::test]
    async fn test_edit_employee_database_failure_is_generic() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let schema = create_test_schema(db, mock_helper(DuplicateCheck::Pass));

        let res = schema.execute(Request::new(edit_query("Lead"))).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["editEmployee"]["message"], "Error editing employee");
        assert!(data["editEmployee"].get("validationErrors").is_none());
    }
}
