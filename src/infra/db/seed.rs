//! Demo customer seed data.
//!
//! Inserts the three well-known demo accounts with conflict-skip semantics
//! keyed on the unique phone column, so re-running the seed can never
//! duplicate rows or fail on ones that already exist.

use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Insert, Set};

use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::customer;

/// Insert the demo customers, skipping any phone already present.
/// Returns the number of rows actually inserted.
pub async fn seed_customers(db: &DatabaseConnection) -> AppResult<u64> {
    let inserted = seed_insert()
        .exec_without_returning(db)
        .await
        .map_err(AppError::from)?;

    Ok(inserted)
}

/// The seed statement: one multi-row insert with the conflict skip
/// keyed on the unique phone column.
fn seed_insert() -> Insert<customer::ActiveModel> {
    customer::Entity::insert_many(demo_customers()).on_conflict(
        OnConflict::column(customer::Column::Phone)
            .do_nothing()
            .to_owned(),
    )
}

/// Total number of demo customers the seed maintains.
pub fn demo_customer_count() -> u64 {
    demo_customers().len() as u64
}

/// The three demo accounts. Unset fields exercise the schema defaults:
/// Carol gets a NULL email, a "standard" account type, a zero balance and
/// "active" status without any of them being written here.
fn demo_customers() -> Vec<customer::ActiveModel> {
    vec![
        customer::ActiveModel {
            phone: Set("+1234567890".to_string()),
            name: Set(Some("Alice Johnson".to_string())),
            email: Set(Some("alice.johnson@example.com".to_string())),
            account_type: Set(Some("premium".to_string())),
            balance: Set(Some(Decimal::new(25000, 2))),
            ..Default::default()
        },
        customer::ActiveModel {
            phone: Set("+0987654321".to_string()),
            name: Set(Some("Bob Martin".to_string())),
            email: Set(Some("bob.martin@example.com".to_string())),
            // Suspended over an unpaid balance; the column allows negatives
            balance: Set(Some(Decimal::new(-1250, 2))),
            status: Set(Some("suspended".to_string())),
            ..Default::default()
        },
        customer::ActiveModel {
            phone: Set("+1122334455".to_string()),
            name: Set(Some("Carol Diaz".to_string())),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn set_value<T>(value: &ActiveValue<T>) -> T
    where
        T: Clone + Into<sea_orm::Value>,
    {
        match value {
            ActiveValue::Set(v) | ActiveValue::Unchanged(v) => v.clone(),
            ActiveValue::NotSet => panic!("value not set"),
        }
    }

    #[test]
    fn test_seed_contains_exactly_three_customers() {
        assert_eq!(demo_customers().len(), 3);
        assert_eq!(demo_customer_count(), 3);
    }

    #[test]
    fn test_seed_statement_skips_existing_phones() {
        use sea_orm::{DbBackend, QueryTrait};

        let sql = seed_insert().build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#"ON CONFLICT ("phone") DO NOTHING"#));
    }

    #[test]
    fn test_seed_phones_are_unique() {
        let rows = demo_customers();
        let mut phones: Vec<String> = rows.iter().map(|r| set_value(&r.phone)).collect();
        phones.sort();
        phones.dedup();
        assert_eq!(phones.len(), rows.len());
    }

    #[test]
    fn test_alice_has_premium_balance() {
        let rows = demo_customers();
        let alice = rows
            .iter()
            .find(|r| set_value(&r.phone) == "+1234567890")
            .unwrap();

        assert_eq!(set_value(&alice.balance), Some(Decimal::new(25000, 2)));
        assert_eq!(set_value(&alice.account_type), Some("premium".to_string()));
    }

    #[test]
    fn test_bob_is_suspended() {
        let rows = demo_customers();
        let bob = rows
            .iter()
            .find(|r| set_value(&r.phone) == "+0987654321")
            .unwrap();

        assert_eq!(set_value(&bob.status), Some("suspended".to_string()));
    }

    #[test]
    fn test_carol_relies_on_schema_defaults() {
        let rows = demo_customers();
        let carol = rows
            .iter()
            .find(|r| set_value(&r.phone) == "+1122334455")
            .unwrap();

        assert!(matches!(carol.email, ActiveValue::NotSet));
        assert!(matches!(carol.account_type, ActiveValue::NotSet));
        assert!(matches!(carol.balance, ActiveValue::NotSet));
        assert!(matches!(carol.status, ActiveValue::NotSet));
    }
}
