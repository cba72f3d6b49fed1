//! Customer repository keyed on the phone natural key.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use crate::domain::Customer;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Lookups use the phone number, not the surrogate id: callers are
/// identified by caller ID, and phone is the schema's unique natural key.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by phone number
    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Customer>>;

    /// Set a customer's account status, returning the updated record.
    /// Returns None when no customer has that phone number.
    async fn update_status(&self, phone: &str, status: &str) -> AppResult<Option<Customer>>;
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find()
            .filter(customer::Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Customer::from))
    }

    async fn update_status(&self, phone: &str, status: &str) -> AppResult<Option<Customer>> {
        let existing = CustomerEntity::find()
            .filter(customer::Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        let Some(model) = existing else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.status = Set(Some(status.to_string()));

        let updated = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Some(Customer::from(updated)))
    }
}
