use async_graphql::{Context, Error, Object, Result};
use repositories::EmployeeRepository;

use crate::types::employee::Employee;
use crate::SharedConnection;

#[derive(Default)]
pub struct EmployeeQueries;

#[Object]
impl EmployeeQueries {
    /// All employees ordered by last name
    async fn employees(&self, ctx: &Context<'_>) -> Result<Vec<Employee>> {
        let db = ctx.data::<SharedConnection>()?;

        let employees = EmployeeRepository::get_employees(db).await.map_err(|e| {
            tracing::error!(error = %e, "failed to load employees");
            Error::new("Error loading employees")
        })?;

        Ok(employees.into_iter().map(Employee::from).collect())
    }

    async fn employee(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Employee>> {
        let db = ctx.data::<SharedConnection>()?;

        let employee = EmployeeRepository::get_employee(db, id).await.map_err(|e| {
            tracing::error!(error = %e, employee_id = id, "failed to load employee");
            Error::new("Error loading employee")
        })?;

        Ok(employee.map(Employee::from))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_employees_lists_all() {
        let db = mock_db()
            .append_query_results([existing_employees()])
            .into_connection();
        let schema = create_test_schema(db, untouched_helper());

        let res = schema
            .execute(Request::new(
                "query { employees { id firstName email isActive hireDate } }",
            ))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let employees = data["employees"].as_array().unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0]["firstName"], "John");
        assert_eq!(employees[0]["isActive"], true);
        assert_eq!(employees[0]["hireDate"], "2023-01-01");
    }

    #[tokio::test]
    async fn test_employee_by_id() {
        let db = mock_db()
            .append_query_results([vec![existing_employees().remove(1)]])
            .into_connection();
        let schema = create_test_schema(db, untouched_helper());

        let res = schema
            .execute(Request::new("query { employee(id: 2) { email departmentId } }"))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["employee"]["email"], "jane.smith@example.com");
        assert_eq!(data["employee"]["departmentId"], 2);
    }
}
