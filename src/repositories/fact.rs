//! # Fact Repository
//!
//! Stores locally saved cat facts. The listing keeps a fixed window of the
//! latest 20 entries; clearing is used when the UI refreshes facts from the
//! external API.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::error::RepositoryError;
use crate::models::fact::{self, Entity as Fact};

/// Number of facts returned by a listing.
const FACT_WINDOW: u64 = 20;

/// Request data for saving a cat fact
#[derive(Debug, Clone)]
pub struct CreateFactRequest {
    pub fact: String,
    pub length: i32,
}

/// Repository for fact database operations
pub struct FactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactRepository<'a> {
    /// Create a new FactRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Save a single fact
    pub async fn create_fact(
        &self,
        request: CreateFactRequest,
    ) -> Result<fact::Model, RepositoryError> {
        if request.fact.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "Fact text is required and cannot be empty",
            ));
        }

        let entry = fact::ActiveModel {
            fact: Set(request.fact),
            length: Set(request.length),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        entry
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// List the latest facts, newest first
    pub async fn list_facts(&self) -> Result<Vec<fact::Model>, RepositoryError> {
        Fact::find()
            .order_by_desc(fact::Column::CreatedAt)
            .order_by_desc(fact::Column::Id)
            .limit(FACT_WINDOW)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Remove all stored facts
    pub async fn clear_facts(&self) -> Result<u64, RepositoryError> {
        let result = Fact::delete_many()
            .exec(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result.rows_affected)
    }
}
