//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean data-access API the
//! HTTP handlers call into.

pub mod adoption;
pub mod breed;
pub mod fact;

pub use adoption::{
    AdoptionFilter, AdoptionRepository, AdoptionWithBreed, CreateAdoptionRequest,
    UpdateAdoptionRequest,
};
pub use breed::{BreedFields, BreedRepository};
pub use fact::{CreateFactRequest, FactRepository};
