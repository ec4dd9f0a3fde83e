use data_access_objects::DepartmentDao;
use models::departments;
use sea_orm::*;
use services::ValidDepartment;

use super::DepartmentRepository;

impl DepartmentRepository {
    pub async fn create_department(
        db: &DatabaseConnection,
        department: ValidDepartment,
    ) -> Result<departments::Model, String> {
        let model = departments::ActiveModel {
            name: ActiveValue::set(department.name),
            code: ActiveValue::set(department.code),
            location: ActiveValue::set(department.location),
            ..Default::default()
        };

        DepartmentDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::DepartmentRepository;
    use crate::test_helpers::*;
    use sea_orm::DbErr;
    use services::ValidDepartment;

    fn it_department() -> ValidDepartment {
        ValidDepartment {
            name: "IT".into(),
            code: "IT1".into(),
            location: "New York".into(),
        }
    }

    #[tokio::test]
    async fn test_create_department_returns_stored_row() {
        let db = mock_db()
            .append_query_results([vec![department(7, "IT", "IT1", "New York")]])
            .into_connection();

        let created = DepartmentRepository::create_department(&db, it_department())
            .await
            .unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.code, "IT1");
        assert_eq!(created.location, "New York");
    }

    #[tokio::test]
    async fn test_create_department_reports_database_error() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("duplicate key".into())])
            .into_connection();

        let result = DepartmentRepository::create_department(&db, it_department()).await;

        assert!(result.unwrap_err().starts_with("Database error"));
    }
}
