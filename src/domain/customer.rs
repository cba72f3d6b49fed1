//! Customer domain entity and related types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{STATUS_ACTIVE, STATUS_CANCELLED, STATUS_SUSPENDED};

/// Account status enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Cancelled,
}

impl AccountStatus {
    /// Check if the account is in good standing
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_SUSPENDED => AccountStatus::Suspended,
            STATUS_CANCELLED => AccountStatus::Cancelled,
            _ => AccountStatus::Active,
        }
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "{}", STATUS_ACTIVE),
            AccountStatus::Suspended => write!(f, "{}", STATUS_SUSPENDED),
            AccountStatus::Cancelled => write!(f, "{}", STATUS_CANCELLED),
        }
    }
}

/// Customer domain entity.
///
/// `phone` doubles as the natural key: conversations and tickets reference
/// it informally, without a foreign key in the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub phone: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_type: String,
    pub balance: Decimal,
    pub status: AccountStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl Customer {
    /// Check if the account can be serviced normally
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_known_values() {
        assert_eq!(AccountStatus::from("active"), AccountStatus::Active);
        assert_eq!(AccountStatus::from("suspended"), AccountStatus::Suspended);
        assert_eq!(AccountStatus::from("cancelled"), AccountStatus::Cancelled);
    }

    #[test]
    fn test_status_unknown_value_falls_back_to_active() {
        assert_eq!(AccountStatus::from("archived"), AccountStatus::Active);
    }

    #[test]
    fn test_status_display_round_trip() {
        for status in [
            AccountStatus::Active,
            AccountStatus::Suspended,
            AccountStatus::Cancelled,
        ] {
            assert_eq!(AccountStatus::from(status.to_string().as_str()), status);
        }
    }

    #[test]
    fn test_status_into_string_matches_stored_values() {
        assert_eq!(String::from(AccountStatus::Active), "active");
        assert_eq!(String::from(AccountStatus::Suspended), "suspended");
        assert_eq!(String::from(AccountStatus::Cancelled), "cancelled");
    }

    #[test]
    fn test_is_active_follows_status() {
        let mut customer = Customer {
            id: 2,
            phone: "+0987654321".to_string(),
            name: Some("Bob Martin".to_string()),
            email: None,
            account_type: "standard".to_string(),
            balance: Decimal::ZERO,
            status: AccountStatus::Active,
            created_at: None,
        };
        assert!(customer.is_active());

        customer.status = AccountStatus::Suspended;
        assert!(!customer.is_active());
    }
}
