//! Migration: Create the customers table.
//!
//! Column types, nullability and defaults are a published contract; other
//! consumers of this database read these tables directly.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Customers::Phone)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(100).null())
                    .col(ColumnDef::new(Customers::Email).string_len(100).null())
                    .col(
                        ColumnDef::new(Customers::AccountType)
                            .string_len(50)
                            .default("standard"),
                    )
                    .col(
                        ColumnDef::new(Customers::Balance)
                            .decimal_len(10, 2)
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::Status)
                            .string_len(30)
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Phone,
    Name,
    Email,
    AccountType,
    Balance,
    Status,
    CreatedAt,
}
