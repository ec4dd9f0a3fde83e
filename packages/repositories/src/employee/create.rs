use data_access_objects::EmployeeDao;
use models::employees;
use sea_orm::*;
use services::ValidEmployee;

use super::{apply, EmployeeRepository};

impl EmployeeRepository {
    pub async fn create_employee(
        db: &DatabaseConnection,
        employee: ValidEmployee,
    ) -> Result<employees::Model, String> {
        let mut model = <employees::ActiveModel as Default>::default();
        apply(&mut model, employee);

        EmployeeDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
