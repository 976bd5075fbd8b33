//! Migration to create the breeds table.
//!
//! Breeds form the catalog that adoption listings optionally reference
//! for display-name resolution.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Breeds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Breeds::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Breeds::Breed).text().not_null())
                    .col(ColumnDef::new(Breeds::Country).text().null())
                    .col(ColumnDef::new(Breeds::Origin).text().null())
                    .col(ColumnDef::new(Breeds::Coat).text().null())
                    .col(ColumnDef::new(Breeds::Pattern).text().null())
                    .col(ColumnDef::new(Breeds::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Breeds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Breeds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Breeds {
    Table,
    Id,
    Breed,
    Country,
    Origin,
    Coat,
    Pattern,
    ImageUrl,
    CreatedAt,
}
