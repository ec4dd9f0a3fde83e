use data_access_objects::EmployeeDao;
use sea_orm::*;

use super::{EmployeeRepository, EMPLOYEE_NOT_FOUND};

impl EmployeeRepository {
    pub async fn delete_employee(db: &DatabaseConnection, id: i32) -> Result<i32, String> {
        let existing = EmployeeDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| EMPLOYEE_NOT_FOUND.to_string())?;

        EmployeeDao::delete(db, existing.into_active_model())
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{EmployeeRepository, EMPLOYEE_NOT_FOUND};
    use crate::test_helpers::*;
    use models::employees;

    #[tokio::test]
    async fn test_delete_employee_deletes() {
        let db = mock_db()
            .append_query_results([vec![employee(4, "Sam", "sam@example.com", 1)]])
            .append_exec_results([deleted_one()])
            .into_connection();

        let id = EmployeeRepository::delete_employee(&db, 4).await.unwrap();

        assert_eq!(id, 4);
    }

    #[tokio::test]
    async fn test_delete_employee_nonexistent_returns_error() {
        let db = mock_db()
            .append_query_results([Vec::<employees::Model>::new()])
            .into_connection();

        let result = EmployeeRepository::delete_employee(&db, 4).await;

        assert_eq!(result.unwrap_err(), EMPLOYEE_NOT_FOUND);
    }
}
