//! Fact entity model
//!
//! Locally stored cat facts; the UI refreshes these from an external API
//! and persists the ones it wants to keep.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

/// Stored cat fact
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "facts")]
pub struct Model {
    /// Unique identifier for the fact (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The fact text
    pub fact: String,

    /// Character length as reported by the upstream API
    pub length: i32,

    /// Timestamp when the fact was saved
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
