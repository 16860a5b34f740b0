//! Recurring payment service

use chrono::NaiveDate;

use crate::error::{CofferError, CofferResult};
use crate::models::{Frequency, Money, PaymentId, RecurringPayment, UserId};
use crate::store::Store;

/// Service for recurring payment management
pub struct RecurringPaymentService<'a> {
    store: &'a Store,
}

impl<'a> RecurringPaymentService<'a> {
    /// Create a new recurring payment service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Track a new recurring payment
    pub fn add(
        &self,
        name: &str,
        amount: Money,
        due_date: NaiveDate,
        frequency: Frequency,
        user_id: UserId,
    ) -> CofferResult<RecurringPayment> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CofferError::Validation(
                "Payment name cannot be empty".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(CofferError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        let id = self
            .store
            .recurring
            .insert(name, amount, due_date, frequency, user_id)?;
        tracing::info!(%user_id, payment = name, %due_date, %frequency, "added recurring payment");

        Ok(RecurringPayment {
            id,
            name: name.to_string(),
            amount,
            due_date,
            frequency,
            user_id,
        })
    }

    /// List the user's recurring payments, soonest due first
    pub fn list(&self, user_id: UserId) -> CofferResult<Vec<RecurringPayment>> {
        self.store.recurring.list_for_user(user_id)
    }

    /// Stop tracking a payment
    pub fn delete(&self, id: PaymentId, user_id: UserId) -> CofferResult<()> {
        let deleted = self.store.recurring.delete(id, user_id)?;
        if !deleted {
            return Err(CofferError::payment_not_found(id));
        }

        tracing::info!(%user_id, %id, "deleted recurring payment");
        Ok(())
    }

    /// Record a payment as made on `payment_date` and advance the due
    /// date one period past it, returning the new due date.
    pub fn mark_paid(
        &self,
        id: PaymentId,
        payment_date: NaiveDate,
        user_id: UserId,
    ) -> CofferResult<NaiveDate> {
        let payment = self
            .store
            .recurring
            .get(id, user_id)?
            .ok_or_else(|| CofferError::payment_not_found(id))?;

        let next_due = payment.frequency.next_due_date(payment_date).ok_or_else(|| {
            CofferError::Validation(format!(
                "No valid {} due date one period after {}",
                payment.frequency, payment_date
            ))
        })?;

        if !self.store.recurring.update_due_date(id, next_due, user_id)? {
            return Err(CofferError::payment_not_found(id));
        }

        tracing::info!(%user_id, payment = %payment.name, %next_due, "marked payment paid");
        Ok(next_due)
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_validates() {
        let (_temp_dir, store, user) = create_test_store();
        let service = RecurringPaymentService::new(&store);

        let err = service
            .add("", Money::from_cents(100), date(2024, 4, 1), Frequency::Monthly, user)
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add("Rent", Money::zero(), date(2024, 4, 1), Frequency::Monthly, user)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_mark_paid_advances_from_payment_date() {
        let (_temp_dir, store, user) = create_test_store();
        let service = RecurringPaymentService::new(&store);

        let payment = service
            .add("Rent", Money::from_cents(90000), date(2024, 1, 31), Frequency::Monthly, user)
            .unwrap();

        // Paid a few days late: the next due date follows the payment
        // date, not the old due date
        let next = service.mark_paid(payment.id, date(2024, 2, 3), user).unwrap();
        assert_eq!(next, date(2024, 3, 3));

        let stored = service.list(user).unwrap();
        assert_eq!(stored[0].due_date, date(2024, 3, 3));
    }

    #[test]
    fn test_mark_paid_requires_ownership() {
        let (_temp_dir, store, user) = create_test_store();
        let other = store.users.insert("bob", "p2").unwrap();
        let service = RecurringPaymentService::new(&store);

        let payment = service
            .add("Rent", Money::from_cents(90000), date(2024, 4, 1), Frequency::Monthly, user)
            .unwrap();

        let err = service
            .mark_paid(payment.id, date(2024, 4, 1), other)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mark_paid_on_leap_day_yearly_fails() {
        let (_temp_dir, store, user) = create_test_store();
        let service = RecurringPaymentService::new(&store);

        let payment = service
            .add("Domain", Money::from_cents(1200), date(2024, 2, 29), Frequency::Yearly, user)
            .unwrap();

        // Feb 29, 2025 does not exist; the due date stays put and the
        // caller gets an actionable error
        let err = service
            .mark_paid(payment.id, date(2024, 2, 29), user)
            .unwrap_err();
        assert!(err.is_validation());

        let stored = service.list(user).unwrap();
        assert_eq!(stored[0].due_date, date(2024, 2, 29));
    }

    #[test]
    fn test_delete_requires_ownership() {
        let (_temp_dir, store, user) = create_test_store();
        let other = store.users.insert("bob", "p2").unwrap();
        let service = RecurringPaymentService::new(&store);

        let payment = service
            .add("Rent", Money::from_cents(90000), date(2024, 4, 1), Frequency::Monthly, user)
            .unwrap();

        assert!(service.delete(payment.id, other).unwrap_err().is_not_found());
        service.delete(payment.id, user).unwrap();
        assert!(service.list(user).unwrap().is_empty());
    }
}
