//! Adoption entity model
//!
//! This module contains the SeaORM entity model for the adoptions table,
//! plus the closed enumerations validated at the API boundary. Soft-deleted
//! rows stay in the table with a non-null `deleted_at`.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::breed::Entity as Breed;

/// Two-state adoption lifecycle of a listed cat.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "adopted")]
    Adopted,
}

impl AdoptionStatus {
    /// Parses a boundary value, rejecting anything outside the declared set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "adopted" => Some(Self::Adopted),
            _ => None,
        }
    }

    /// The wire/database representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Adopted => "adopted",
        }
    }
}

/// Gender of a listed cat.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "unknown")]
    Unknown,
}

impl Gender {
    /// Parses a boundary value, rejecting anything outside the declared set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Adoption listing entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "adoptions")]
pub struct Model {
    /// Unique identifier for the listing (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Name of the cat
    pub name: String,

    /// Optional reference into the breeds catalog
    pub breed_id: Option<i32>,

    /// Free-text age description (optional)
    pub age: Option<String>,

    /// Gender of the cat (optional)
    pub gender: Option<Gender>,

    /// Temperament description (optional)
    pub temperament: Option<String>,

    /// Longer description of the cat (optional)
    pub description: Option<String>,

    /// Current adoption status
    pub adoption_status: AdoptionStatus,

    /// Contact person for the listing
    pub contact_name: Option<String>,

    /// Contact e-mail for the listing
    pub contact_email: Option<String>,

    /// Contact phone number (optional)
    pub contact_phone: Option<String>,

    /// Location of the cat (optional)
    pub location: Option<String>,

    /// Public path to an uploaded image (optional)
    pub image_url: Option<String>,

    /// Timestamp when the listing was created (immutable)
    pub created_at: DateTimeWithTimeZone,

    /// Soft-delete marker; a non-null value excludes the row from listings
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Breed",
        from = "Column::BreedId",
        to = "super::breed::Column::Id"
    )]
    Breed,
}

impl Related<Breed> for Entity {
    fn to() -> RelationDef {
        Relation::Breed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_rejects_unknown_values() {
        assert_eq!(
            AdoptionStatus::parse("available"),
            Some(AdoptionStatus::Available)
        );
        assert_eq!(
            AdoptionStatus::parse("adopted"),
            Some(AdoptionStatus::Adopted)
        );
        assert_eq!(AdoptionStatus::parse("pending"), None);
        assert_eq!(AdoptionStatus::parse(""), None);
        assert_eq!(AdoptionStatus::parse("Adopted"), None);
    }

    #[test]
    fn gender_parse_rejects_unknown_values() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("unknown"), Some(Gender::Unknown));
        assert_eq!(Gender::parse("other"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&AdoptionStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
    }
}
