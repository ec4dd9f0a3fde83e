// src/setup.rs

use models::prelude::{Departments, Employees};
use sea_orm::*;

pub(super) async fn set_up_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!("DB connected");

    create_tables(&db).await?;
    Ok(db)
}

/// Creates the tables the entities describe when they do not exist yet.
/// Departments go first since employees reference them.
async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut departments = schema.create_table_from_entity(Departments);
    departments.if_not_exists();
    db.execute(backend.build(&departments)).await?;

    let mut employees = schema.create_table_from_entity(Employees);
    employees.if_not_exists();
    db.execute(backend.build(&employees)).await?;

    tracing::debug!("tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_tables_creates_departments_before_employees() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult { last_insert_id: 0, rows_affected: 0 },
                MockExecResult { last_insert_id: 0, rows_affected: 0 },
            ])
            .into_connection();

        create_tables(&db).await.unwrap();

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let first = format!("{:?}", log[0]);
        let second = format!("{:?}", log[1]);
        assert!(first.contains("IF NOT EXISTS"));
        assert!(first.contains("departments") && !first.contains("employees"));
        assert!(second.contains("employees"));
    }
}
