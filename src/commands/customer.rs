//! Customer command - Account lookup and status changes.

use std::sync::Arc;

use crate::cli::args::{CustomerAction, CustomerArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{CustomerStore, Database};
use crate::services::{CustomerManager, CustomerService};

/// Execute the customer command
pub async fn execute(args: CustomerArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let service = CustomerManager::new(Arc::new(CustomerStore::new(db.get_connection())));

    match args.action {
        CustomerAction::Get { phone } => {
            let customer = service.get_customer(&phone).await?;
            let json = serde_json::to_string_pretty(&customer)
                .map_err(|e| AppError::internal(e.to_string()))?;
            println!("{}", json);
        }
        CustomerAction::SetStatus { phone, status } => {
            let customer = service.update_status(&phone, &status).await?;
            tracing::info!(phone = %customer.phone, status = %customer.status, "Account status updated");
            println!("{} is now {}", customer.phone, customer.status);
        }
    }

    Ok(())
}
