use data_access_objects::DepartmentDao;
use models::departments::Model;
use sea_orm::*;

use super::DepartmentRepository;

impl DepartmentRepository {
    pub async fn get_departments(db: &DatabaseConnection) -> Result<Vec<Model>, String> {
        DepartmentDao::find_all(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn get_department(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, String> {
        DepartmentDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
