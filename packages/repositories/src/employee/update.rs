use data_access_objects::EmployeeDao;
use models::employees::Model;
use sea_orm::*;
use services::ValidEmployee;

use super::{apply, EmployeeRepository, EMPLOYEE_NOT_FOUND};

impl EmployeeRepository {
    pub async fn update_employee(
        db: &DatabaseConnection,
        id: i32,
        employee: ValidEmployee,
    ) -> Result<Model, String> {
        let existing = EmployeeDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| EMPLOYEE_NOT_FOUND.to_string())?;

        let mut am = existing.into_active_model();
        apply(&mut am, employee);

        EmployeeDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{EmployeeRepository, EMPLOYEE_NOT_FOUND};
    use crate::test_helpers::*;
    use chrono::NaiveDate;
    use models::employees;
    use services::ValidEmployee;

    fn promoted() -> ValidEmployee {
        ValidEmployee {
            first_name: "John".into(),
            last_name: "Doe".into(),
            title: "Lead Developer".into(),
            email: "john.doe@example.com".into(),
            country_code: "1".into(),
            phone_number: "1234567890".into(),
            is_active: true,
            department_id: 2,
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_update_employee_writes_new_values() {
        let mut stored = employee(1, "John", "john.doe@example.com", 2);
        stored.title = "Lead Developer".into();
        let db = mock_db()
            .append_query_results([
                vec![employee(1, "John", "john.doe@example.com", 1)],
                vec![stored],
            ])
            .into_connection();

        let updated = EmployeeRepository::update_employee(&db, 1, promoted())
            .await
            .unwrap();

        assert_eq!(updated.title, "Lead Developer");
        assert_eq!(updated.department_id, 2);
    }

    #[tokio::test]
    async fn test_update_employee_missing_returns_not_found() {
        let db = mock_db()
            .append_query_results([Vec::<employees::Model>::new()])
            .into_connection();

        let result = EmployeeRepository::update_employee(&db, 3, promoted()).await;

        assert_eq!(result.unwrap_err(), EMPLOYEE_NOT_FOUND);
    }
}
