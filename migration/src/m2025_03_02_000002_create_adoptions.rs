//! Migration to create the adoptions table.
//!
//! Adoption listings carry descriptive fields, contact details, a two-state
//! adoption status, and an optional foreign key into the breeds catalog.
//! Deleting a breed leaves its adoptions in place with a NULL breed.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Adoptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Adoptions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Adoptions::Name).text().not_null())
                    .col(ColumnDef::new(Adoptions::BreedId).integer().null())
                    .col(ColumnDef::new(Adoptions::Age).text().null())
                    .col(ColumnDef::new(Adoptions::Gender).string().null())
                    .col(ColumnDef::new(Adoptions::Temperament).text().null())
                    .col(ColumnDef::new(Adoptions::Description).text().null())
                    .col(
                        ColumnDef::new(Adoptions::AdoptionStatus)
                            .string()
                            .not_null()
                            .default("available"),
                    )
                    .col(ColumnDef::new(Adoptions::ContactName).text().null())
                    .col(ColumnDef::new(Adoptions::ContactEmail).text().null())
                    .col(ColumnDef::new(Adoptions::ContactPhone).text().null())
                    .col(ColumnDef::new(Adoptions::Location).text().null())
                    .col(ColumnDef::new(Adoptions::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Adoptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_adoptions_breed_id")
                            .from(Adoptions::Table, Adoptions::BreedId)
                            .to(Breeds::Table, Breeds::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Adoptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Adoptions {
    Table,
    Id,
    Name,
    BreedId,
    Age,
    Gender,
    Temperament,
    Description,
    AdoptionStatus,
    ContactName,
    ContactEmail,
    ContactPhone,
    Location,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Breeds {
    Table,
    Id,
}
