//! Migration to create the facts table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Facts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Facts::Fact).text().not_null())
                    .col(ColumnDef::new(Facts::Length).integer().not_null())
                    .col(
                        ColumnDef::new(Facts::CreatedAt)
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
            .drop_table(Table::drop().table(Facts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Facts {
    Table,
    Id,
    Fact,
    Length,
    CreatedAt,
}
