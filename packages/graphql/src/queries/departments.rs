use async_graphql::{Context, Error, Object, Result};
use repositories::DepartmentRepository;

use crate::types::department::Department;
use crate::SharedConnection;

#[derive(Default)]
pub struct DepartmentQueries;

#[Object]
impl DepartmentQueries {
    /// All departments ordered by id
    async fn departments(&self, ctx: &Context<'_>) -> Result<Vec<Department>> {
        let db = ctx.data::<SharedConnection>()?;

        let departments = DepartmentRepository::get_departments(db).await.map_err(|e| {
            tracing::error!(error = %e, "failed to load departments");
            Error::new("Error loading departments")
        })?;

        Ok(departments.into_iter().map(Department::from).collect())
    }

    async fn department(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Department>> {
        let db = ctx.data::<SharedConnection>()?;

        let department = DepartmentRepository::get_department(db, id).await.map_err(|e| {
            tracing::error!(error = %e, department_id = id, "failed to load department");
            Error::new("Error loading department")
        })?;

        Ok(department.map(Department::from))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use models::departments;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_departments_lists_all() {
        let db = mock_db()
            .append_query_results([existing_departments()])
            .into_connection();
        let schema = create_test_schema(db, untouched_helper());

        let res = schema
            .execute(Request::new("query { departments { id code location } }"))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let departments = data["departments"].as_array().unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0]["code"], "IT1");
        assert_eq!(departments[1]["location"], "San Francisco");
    }

    #[tokio::test]
    async fn test_department_unknown_id_is_null() {
        let db = mock_db()
            .append_query_results([Vec::<departments::Model>::new()])
            .into_connection();
        let schema = create_test_schema(db, untouched_helper());

        let res = schema
            .execute(Request::new("query { department(id: 40) { id } }"))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert!(data["department"].is_null());
    }

    #[tokio::test]
    async fn test_departments_database_failure_hides_details() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("password authentication failed".into())])
            .into_connection();
        let schema = create_test_schema(db, untouched_helper());

        let res = schema.execute(Request::new("query { departments { id } }")).await;

        assert_eq!(res.errors.len(), 1);
        assert_eq!(res.errors[0].message, "Error loading departments");
    }
}
