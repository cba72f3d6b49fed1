//! Migration: Create the conversations table.
//!
//! No foreign key to customers: a call can be recorded before the caller
//! has an account, so `phone` is an informal reference only.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conversations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conversations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Conversations::Phone)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversations::Role)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conversations::Content).text().not_null())
                    .col(
                        ColumnDef::new(Conversations::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // History reads always filter on phone
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_phone")
                    .table(Conversations::Table)
                    .col(Conversations::Phone)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_conversations_phone")
                    .table(Conversations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Conversations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Conversations {
    Table,
    Id,
    Phone,
    Role,
    Content,
    CreatedAt,
}
