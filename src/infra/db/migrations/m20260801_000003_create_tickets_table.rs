//! Migration: Create the tickets table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::Phone).string_len(20).null())
                    .col(ColumnDef::new(Tickets::Issue).text().null())
                    .col(
                        ColumnDef::new(Tickets::Priority)
                            .string_len(20)
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(Tickets::Status)
                            .string_len(20)
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Ticket lookups filter on phone
        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_phone")
                    .table(Tickets::Table)
                    .col(Tickets::Phone)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tickets_phone")
                    .table(Tickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tickets {
    Table,
    Id,
    Phone,
    Issue,
    Priority,
    Status,
    CreatedAt,
}
