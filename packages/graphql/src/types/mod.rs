pub mod department;
pub mod employee;

use async_graphql::SimpleObject;

#[derive(SimpleObject)]
pub struct DeletedRecord {
    pub id: i32,
    pub message: String,
}
