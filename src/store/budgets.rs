//! Monthly budget repository

use rusqlite::{params, OptionalExtension};

use super::Db;
use crate::error::{CofferError, CofferResult};
use crate::models::{Money, Month, UserId};

/// Repository for monthly budget rows, keyed by (user, month)
pub struct BudgetRepository {
    db: Db,
}

impl BudgetRepository {
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    /// Set the budget for a month, overwriting any existing amount for
    /// the same (user, month) pair
    pub fn upsert(&self, month: Month, amount: Money, user_id: UserId) -> CofferResult<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO budgets (month, amount, user_id) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id, month) DO UPDATE SET amount = excluded.amount",
            params![month.to_string(), amount.cents(), user_id.as_raw()],
        )?;
        Ok(())
    }

    /// The budget for a month, if one has been set
    pub fn get(&self, month: Month, user_id: UserId) -> CofferResult<Option<Money>> {
        let conn = self.db.connect()?;
        conn.query_row(
            "SELECT amount FROM budgets WHERE month = ?1 AND user_id = ?2",
            params![month.to_string(), user_id.as_raw()],
            |row| row.get::<_, i64>(0).map(Money::from_cents),
        )
        .optional()
        .map_err(CofferError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store, UserId) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open_at(temp_dir.path().join("coffer.db")).unwrap();
        let user = store.users.insert("alice", "p1").unwrap();
        (temp_dir, store, user)
    }

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    #[test]
    fn test_get_unset_month() {
        let (_temp_dir, store, user) = create_test_store();
        assert!(store.budgets.get(month("2025-01"), user).unwrap().is_none());
    }

    #[test]
    fn test_upsert_overwrites() {
        let (_temp_dir, store, user) = create_test_store();

        store
            .budgets
            .upsert(month("2025-01"), Money::from_cents(50000), user)
            .unwrap();
        store
            .budgets
            .upsert(month("2025-01"), Money::from_cents(70000), user)
            .unwrap();

        assert_eq!(
            store.budgets.get(month("2025-01"), user).unwrap(),
            Some(Money::from_cents(70000))
        );
    }

    #[test]
    fn test_budgets_are_per_user() {
        let (_temp_dir, store, user) = create_test_store();
        let other = store.users.insert("bob", "p2").unwrap();

        store
            .budgets
            .upsert(month("2025-01"), Money::from_cents(50000), user)
            .unwrap();

        assert!(store.budgets.get(month("2025-01"), other).unwrap().is_none());
    }
}
