//! Customer service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use rust_decimal::Decimal;

use callcenter_store::domain::{AccountStatus, Customer};
use callcenter_store::errors::AppError;
use callcenter_store::infra::repositories::MockCustomerRepository;
use callcenter_store::services::{CustomerManager, CustomerService};

fn sample_customer(phone: &str) -> Customer {
    Customer {
        id: 1,
        phone: phone.to_string(),
        name: Some("Alice Johnson".to_string()),
        email: Some("alice.johnson@example.com".to_string()),
        account_type: "premium".to_string(),
        balance: Decimal::new(25000, 2),
        status: AccountStatus::Active,
        created_at: None,
    }
}

#[tokio::test]
async fn test_get_customer_success() {
    let mut repo = MockCustomerRepository::new();
    repo.expect_find_by_phone()
        .with(eq("+1234567890"))
        .returning(|phone| Ok(Some(sample_customer(phone))));

    let service = CustomerManager::new(Arc::new(repo));
    let result = service.get_customer("+1234567890").await;

    assert!(result.is_ok());
    let customer = result.unwrap();
    assert_eq!(customer.phone, "+1234567890");
    assert_eq!(customer.balance, Decimal::new(25000, 2));
}

#[tokio::test]
async fn test_get_customer_not_found() {
    let mut repo = MockCustomerRepository::new();
    repo.expect_find_by_phone()
        .returning(|_| Ok(None));

    let service = CustomerManager::new(Arc::new(repo));
    let result = service.get_customer("+0000000000").await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_update_status_success() {
    let mut repo = MockCustomerRepository::new();
    repo.expect_update_status()
        .with(eq("+0987654321"), eq("active"))
        .returning(|phone, _| {
            let mut customer = sample_customer(phone);
            customer.status = AccountStatus::Active;
            Ok(Some(customer))
        });

    let service = CustomerManager::new(Arc::new(repo));
    let result = service.update_status("+0987654321", "active").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status, AccountStatus::Active);
}

#[tokio::test]
async fn test_update_status_unknown_phone() {
    let mut repo = MockCustomerRepository::new();
    repo.expect_update_status()
        .returning(|_, _| Ok(None));

    let service = CustomerManager::new(Arc::new(repo));
    let result = service.update_status("+0000000000", "suspended").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_update_status_rejects_invalid_value() {
    // No expectations: an invalid status must never reach the repository.
    let repo = MockCustomerRepository::new();

    let service = CustomerManager::new(Arc::new(repo));
    let result = service.update_status("+1234567890", "paused").await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}
