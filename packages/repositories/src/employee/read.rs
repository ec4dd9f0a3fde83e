use data_access_objects::EmployeeDao;
use models::employees::Model;
use sea_orm::*;

use super::EmployeeRepository;

impl EmployeeRepository {
    pub async fn get_employees(db: &DatabaseConnection) -> Result<Vec<Model>, String> {
        EmployeeDao::find_all(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn get_employee(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, String> {
        EmployeeDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
