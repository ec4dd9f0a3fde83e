use models::employees::{ActiveModel, Column, Entity, Model};
use models::prelude::Employees;
use sea_orm::*;

pub struct EmployeeDao;

impl EmployeeDao {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Employees::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Employees::find_by_id(id).one(db).await
    }

    pub async fn count_in_department(
        db: &DatabaseConnection,
        department_id: i32,
    ) -> Result<u64, DbErr> {
        Employees::find()
            .filter(Column::DepartmentId.eq(department_id))
            .count(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
