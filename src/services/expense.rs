//! Expense service
//!
//! Recording, editing and summarizing expenses. Amount and category are
//! validated here so invalid values never reach the store; mutations are
//! ownership-checked and fail with `NotFoundOrForbidden` when the target
//! is missing or belongs to another user.

use chrono::NaiveDate;

use crate::error::{CofferError, CofferResult};
use crate::models::{DailyTotal, Expense, ExpenseId, Money, UserId};
use crate::store::Store;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Record a new expense
    pub fn add(
        &self,
        date: NaiveDate,
        category: &str,
        amount: Money,
        user_id: UserId,
    ) -> CofferResult<Expense> {
        let category = validate_fields(category, amount)?;

        let id = self.store.expenses.insert(date, category, amount, user_id)?;
        tracing::info!(%user_id, %date, category, %amount, "added expense");

        Ok(Expense {
            id,
            date,
            category: category.to_string(),
            amount,
            user_id,
        })
    }

    /// List the user's expenses, most recent date first
    pub fn list(&self, user_id: UserId) -> CofferResult<Vec<Expense>> {
        self.store.expenses.list_for_user(user_id)
    }

    /// Total spending on or after `start_date`; zero when nothing matches
    pub fn spending_since(&self, start_date: NaiveDate, user_id: UserId) -> CofferResult<Money> {
        self.store.expenses.spending_since(start_date, user_id)
    }

    /// Per-day spending totals in date order, the series behind the
    /// spending chart
    pub fn daily_totals(&self, user_id: UserId) -> CofferResult<Vec<DailyTotal>> {
        self.store.expenses.daily_totals(user_id)
    }

    /// Overwrite an expense's date, category and amount
    pub fn update(
        &self,
        id: ExpenseId,
        new_date: NaiveDate,
        new_category: &str,
        new_amount: Money,
        user_id: UserId,
    ) -> CofferResult<()> {
        let new_category = validate_fields(new_category, new_amount)?;

        let updated = self
            .store
            .expenses
            .update(id, new_date, new_category, new_amount, user_id)?;
        if !updated {
            return Err(CofferError::expense_not_found(id));
        }

        tracing::info!(%user_id, %id, "updated expense");
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId, user_id: UserId) -> CofferResult<()> {
        let deleted = self.store.expenses.delete(id, user_id)?;
        if !deleted {
            return Err(CofferError::expense_not_found(id));
        }

        tracing::info!(%user_id, %id, "deleted expense");
        Ok(())
    }
}

fn validate_fields<'c>(category: &'c str, amount: Money) -> CofferResult<&'c str> {
    let category = category.trim();
    if category.is_empty() {
        return Err(CofferError::Validation(
            "Expense category cannot be empty".into(),
        ));
    }
    if !amount.is_positive() {
        return Err(CofferError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(category)
}
