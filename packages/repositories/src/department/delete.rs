use data_access_objects::{DepartmentDao, EmployeeDao};
use sea_orm::*;

use super::{DepartmentRepository, DEPARTMENT_HAS_EMPLOYEES, DEPARTMENT_NOT_FOUND};

impl DepartmentRepository {
    /// Deletes a department that no employee references.
    pub async fn delete_department(db: &DatabaseConnection, id: i32) -> Result<i32, String> {
        let existing = DepartmentDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| DEPARTMENT_NOT_FOUND.to_string())?;

        let staff = EmployeeDao::count_in_department(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?;
        if staff > 0 {
            return Err(DEPARTMENT_HAS_EMPLOYEES.to_string());
        }

        DepartmentDao::delete(db, existing.into_active_model())
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }
}
