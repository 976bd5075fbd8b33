//! Database migrations for the Whiskers API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_03_02_000001_create_breeds;
mod m2025_03_02_000002_create_adoptions;
mod m2025_03_02_000003_create_facts;
mod m2025_05_18_000001_add_adoption_soft_delete;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_03_02_000001_create_breeds::Migration),
            Box::new(m2025_03_02_000002_create_adoptions::Migration),
            Box::new(m2025_03_02_000003_create_facts::Migration),
            Box::new(m2025_05_18_000001_add_adoption_soft_delete::Migration),
        ]
    }
}
