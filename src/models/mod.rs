//! # Data Models
//!
//! This module contains the SeaORM entity models used throughout the
//! Whiskers API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod adoption;
pub mod breed;
pub mod fact;

pub use adoption::Entity as Adoption;
pub use breed::Entity as Breed;
pub use fact::Entity as Fact;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "whiskers-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
