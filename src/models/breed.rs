//! Breed entity model
//!
//! This module contains the SeaORM entity model for the breeds table, the
//! catalog adoption listings reference for display-name resolution.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

/// Breed catalog entry
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "breeds")]
pub struct Model {
    /// Unique identifier for the breed (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the breed
    pub breed: String,

    /// Country the breed is associated with (optional)
    pub country: Option<String>,

    /// Origin classification, e.g. natural or crossbreed (optional)
    pub origin: Option<String>,

    /// Coat length description (optional)
    pub coat: Option<String>,

    /// Coat pattern description (optional)
    pub pattern: Option<String>,

    /// Public path to an uploaded breed image (optional)
    pub image_url: Option<String>,

    /// Timestamp when the breed was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::adoption::Entity")]
    Adoption,
}

impl Related<super::adoption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Adoption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
