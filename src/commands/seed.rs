//! Seed command - Load the demo customers.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seed;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding demo customers...");

    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    // The seed rows need the schema in place. Migrations are
    // idempotent, so running them here is safe on a live database.
    db.run_migrations().await?;

    let inserted = seed::seed_customers(db.connection()).await?;
    let skipped = seed::demo_customer_count() - inserted;

    if skipped > 0 {
        tracing::info!(inserted, skipped, "Seed finished; existing phone numbers were left untouched");
    } else {
        tracing::info!(inserted, "Seed finished");
    }
    println!("Seeded {} customer(s), {} already present", inserted, skipped);

    Ok(())
}
