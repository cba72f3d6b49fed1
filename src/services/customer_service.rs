//! Customer service - Handles customer account business logic.
//!
//! The schema leaves `status` unconstrained, so the valid-value check
//! lives here, before storage is touched.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{is_valid_account_status, VALID_ACCOUNT_STATUSES};
use crate::domain::Customer;
use crate::errors::{AppError, AppResult};
use crate::infra::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Get a customer by phone number
    async fn get_customer(&self, phone: &str) -> AppResult<Customer>;

    /// Change a customer's account status (active / suspended / cancelled)
    async fn update_status(&self, phone: &str, status: &str) -> AppResult<Customer>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    /// Create new customer service instance with repository
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn get_customer(&self, phone: &str) -> AppResult<Customer> {
        self.repo
            .find_by_phone(phone)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update_status(&self, phone: &str, status: &str) -> AppResult<Customer> {
        if !is_valid_account_status(status) {
            return Err(AppError::validation(format!(
                "Invalid account status '{}', expected one of: {}",
                status,
                VALID_ACCOUNT_STATUSES.join(", ")
            )));
        }

        self.repo
            .update_status(phone, status)
            .await?
            .ok_or(AppError::NotFound)
    }
}
