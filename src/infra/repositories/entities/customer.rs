//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::config::DEFAULT_ACCOUNT_TYPE;
use crate::domain::{AccountStatus, Customer};

/// Columns with database-side defaults (account_type, balance, status,
/// created_at) are nullable in the schema, so they are optional here and
/// normalized during domain conversion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub phone: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_type: Option<String>,
    pub balance: Option<Decimal>,
    pub status: Option<String>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: model.id,
            phone: model.phone,
            name: model.name,
            email: model.email,
            account_type: model
                .account_type
                .unwrap_or_else(|| DEFAULT_ACCOUNT_TYPE.to_string()),
            balance: model.balance.unwrap_or_default(),
            status: model
                .status
                .as_deref()
                .map(AccountStatus::from)
                .unwrap_or(AccountStatus::Active),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_nullable_columns_normalize_to_schema_defaults() {
        let model = Model {
            id: 3,
            phone: "+1122334455".to_string(),
            name: Some("Carol Diaz".to_string()),
            email: None,
            account_type: None,
            balance: None,
            status: None,
            created_at: None,
        };

        let customer = Customer::from(model);
        assert_eq!(customer.account_type, "standard");
        assert_eq!(customer.balance, Decimal::ZERO);
        assert_eq!(customer.status, AccountStatus::Active);
    }

    #[test]
    fn test_stored_status_maps_to_typed_domain() {
        let model = Model {
            id: 2,
            phone: "+0987654321".to_string(),
            name: Some("Bob Martin".to_string()),
            email: Some("bob.martin@example.com".to_string()),
            account_type: Some("standard".to_string()),
            balance: Some(Decimal::new(-1250, 2)),
            status: Some("suspended".to_string()),
            created_at: None,
        };

        let customer = Customer::from(model);
        assert_eq!(customer.status, AccountStatus::Suspended);
        assert_eq!(customer.balance, Decimal::new(-1250, 2));
    }
}
