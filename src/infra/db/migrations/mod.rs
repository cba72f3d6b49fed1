//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20260801_000001_create_customers_table;
mod m20260801_000002_create_conversations_table;
mod m20260801_000003_create_tickets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_customers_table::Migration),
            Box::new(m20260801_000002_create_conversations_table::Migration),
            Box::new(m20260801_000003_create_tickets_table::Migration),
        ]
    }
}
