pub mod types;
pub mod queries;
pub mod mutations;
pub mod errors;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use sea_orm::DatabaseConnection;
use services::ValidationHelper;

use mutations::Mutations;
use queries::Queries;

pub type WorkforceSchema = Schema<Queries, Mutations, EmptySubscription>;

/// The connection pool shared through the GraphQL context.
pub type SharedConnection = Arc<DatabaseConnection>;

/// The validation collaborator shared through the GraphQL context.
pub type SharedValidationHelper = Arc<dyn ValidationHelper>;

pub fn build_schema(db: SharedConnection, helper: SharedValidationHelper) -> WorkforceSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(db)
        .data(helper)
        .finish()
}

#[cfg(test)]
pub mod test_helpers;
