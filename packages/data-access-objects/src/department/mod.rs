use models::departments::{ActiveModel, Column, Entity, Model};
use models::prelude::Departments;
use sea_orm::*;

pub struct DepartmentDao;

impl DepartmentDao {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Departments::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Departments::find_by_id(id).one(db).await
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
