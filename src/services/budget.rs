//! Budget service

use crate::error::{CofferError, CofferResult};
use crate::models::{Money, Month, UserId};
use crate::store::Store;

/// Service for monthly budget management
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Set the user's budget for a month, replacing any previous amount
    pub fn set_monthly_budget(
        &self,
        month: Month,
        amount: Money,
        user_id: UserId,
    ) -> CofferResult<()> {
        if !amount.is_positive() {
            return Err(CofferError::Validation(
                "Budget amount must be greater than zero".into(),
            ));
        }

        self.store.budgets.upsert(month, amount, user_id)?;
        tracing::info!(%user_id, %month, %amount, "set monthly budget");
        Ok(())
    }

    /// The user's budget for a month; `None` when unset
    pub fn get_monthly_budget(&self, month: Month, user_id: UserId) -> CofferResult<Option<Money>> {
        self.store.budgets.get(month, user_id)
    }
}
