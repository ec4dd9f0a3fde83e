use data_access_objects::DepartmentDao;
use models::departments::Model;
use sea_orm::*;
use services::ValidDepartment;

use super::{DepartmentRepository, DEPARTMENT_NOT_FOUND};

impl DepartmentRepository {
    pub async fn update_department(
        db: &DatabaseConnection,
        id: i32,
        department: ValidDepartment,
    ) -> Result<Model, String> {
        let existing = DepartmentDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| DEPARTMENT_NOT_FOUND.to_string())?;

        let mut am = existing.into_active_model();
        am.name = ActiveValue::set(department.name);
        am.code = ActiveValue::set(department.code);
        am.location = ActiveValue::set(department.location);

        DepartmentDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
