use std::sync::Arc;

use async_trait::async_trait;
use data_access_objects::{DepartmentDao, EmployeeDao};
use models::{departments, employees};
use sea_orm::DatabaseConnection;
use services::{StoreError, ValidationHelper};

/// Serves validation snapshots straight from the database, sharing the
/// connection pool with the rest of the process.
pub struct StoreValidationHelper {
    db: Arc<DatabaseConnection>,
}

impl StoreValidationHelper {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ValidationHelper for StoreValidationHelper {
    async fn get_departments(&self) -> Result<Vec<departments::Model>, StoreError> {
        Ok(DepartmentDao::find_all(&self.db).await?)
    }

    async fn get_employees(&self) -> Result<Vec<employees::Model>, StoreError> {
        Ok(EmployeeDao::find_all(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use sea_orm::DbErr;
    use services::{validate_department, DepartmentInput, DuplicateCheck, ExistingRecord, UniqueField};

    #[tokio::test]
    async fn test_reads_departments_from_store() {
        let db = mock_db()
            .append_query_results([vec![department(1, "IT", "IT1", "New York")]])
            .into_connection();
        let helper = StoreValidationHelper::new(Arc::new(db));

        let departments = helper.get_departments().await.unwrap();

        assert_eq!(departments[0].code, "IT1");
    }

    #[tokio::test]
    async fn test_store_failure_becomes_store_error() {
        let db = mock_db()
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();
        let helper = StoreValidationHelper::new(Arc::new(db));

        let err = helper.get_employees().await.unwrap_err();

        assert!(err.message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_default_duplicate_check_scans_records() {
        let helper = StoreValidationHelper::new(Arc::new(mock_db().into_connection()));
        let records: Vec<ExistingRecord> = vec![department(1, "IT", "IT1", "New York").into()];

        let taken = helper
            .check_for_duplicate(UniqueField::Code, "IT1", &records, None)
            .await;
        let own = helper
            .check_for_duplicate(UniqueField::Code, "IT1", &records, Some(1))
            .await;

        assert_eq!(taken, DuplicateCheck::Fail);
        assert_eq!(own, DuplicateCheck::Pass);
    }

    #[tokio::test]
    async fn test_validator_rejects_code_held_in_store() {
        let db = mock_db()
            .append_query_results([vec![department(1, "IT", "IT1", "New York")]])
            .into_connection();
        let helper = StoreValidationHelper::new(Arc::new(db));
        let input = DepartmentInput {
            name: Some("Platform".into()),
            code: Some("IT1".into()),
            location: Some("Berlin".into()),
        };

        let result = validate_department(&helper, &input, None).await;

        assert_eq!(result.validation_errors, vec!["Code taken"]);
    }

    #[tokio::test]
    async fn test_helper_shares_connection_with_caller() {
        let db = Arc::new(
            mock_db()
                .append_query_results([vec![department(1, "IT", "IT1", "New York")]])
                .append_query_results([vec![department(2, "HR", "HR1", "London")]])
                .into_connection(),
        );
        let helper = StoreValidationHelper::new(Arc::clone(&db));

        let seen_by_helper = helper.get_departments().await.unwrap();
        let seen_by_caller = DepartmentDao::find_all(&db).await.unwrap();

        assert_eq!(seen_by_helper[0].code, "IT1");
        assert_eq!(seen_by_caller[0].code, "HR1");
    }
}
