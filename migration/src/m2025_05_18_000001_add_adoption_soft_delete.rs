//! Migration to add soft-delete support to adoptions.
//!
//! A NULL deleted_at means the listing is active; a timestamp marks the row
//! as removed from listings while staying in storage.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Adoptions::Table)
                    .add_column(
                        ColumnDef::new(Adoptions::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Adoptions::Table)
                    .drop_column(Adoptions::DeletedAt)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Adoptions {
    Table,
    DeletedAt,
}
