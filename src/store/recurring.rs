//! Recurring payment repository

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{format_date, parse_date, Db};
use crate::error::{CofferError, CofferResult};
use crate::models::{Frequency, Money, PaymentId, RecurringPayment, UserId};

/// Repository for recurring payment rows
pub struct RecurringPaymentRepository {
    db: Db,
}

impl RecurringPaymentRepository {
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn insert(
        &self,
        name: &str,
        amount: Money,
        due_date: NaiveDate,
        frequency: Frequency,
        user_id: UserId,
    ) -> CofferResult<PaymentId> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO recurring_payments (name, amount, due_date, frequency, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                name,
                amount.cents(),
                format_date(due_date),
                frequency.as_str(),
                user_id.as_raw()
            ],
        )?;
        Ok(PaymentId::from_raw(conn.last_insert_rowid()))
    }

    /// All of a user's recurring payments, soonest due first
    pub fn list_for_user(&self, user_id: UserId) -> CofferResult<Vec<RecurringPayment>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, amount, due_date, frequency, user_id FROM recurring_payments
             WHERE user_id = ?1 ORDER BY due_date ASC, id ASC",
        )?;

        let rows = stmt.query_map(params![user_id.as_raw()], map_payment)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(CofferError::from)
    }

    /// Fetch one payment the user owns
    pub fn get(&self, id: PaymentId, user_id: UserId) -> CofferResult<Option<RecurringPayment>> {
        let conn = self.db.connect()?;
        conn.query_row(
            "SELECT id, name, amount, due_date, frequency, user_id FROM recurring_payments
             WHERE id = ?1 AND user_id = ?2",
            params![id.as_raw(), user_id.as_raw()],
            map_payment,
        )
        .optional()
        .map_err(CofferError::from)
    }

    /// Delete a payment the user owns. Returns whether a row matched.
    pub fn delete(&self, id: PaymentId, user_id: UserId) -> CofferResult<bool> {
        let conn = self.db.connect()?;
        let deleted = conn.execute(
            "DELETE FROM recurring_payments WHERE id = ?1 AND user_id = ?2",
            params![id.as_raw(), user_id.as_raw()],
        )?;
        Ok(deleted > 0)
    }

    /// Move a payment's due date. Returns whether a row matched.
    pub fn update_due_date(
        &self,
        id: PaymentId,
        due_date: NaiveDate,
        user_id: UserId,
    ) -> CofferResult<bool> {
        let conn = self.db.connect()?;
        let updated = conn.execute(
            "UPDATE recurring_payments SET due_date = ?1
             WHERE id = ?2 AND user_id = ?3",
            params![format_date(due_date), id.as_raw(), user_id.as_raw()],
        )?;
        Ok(updated > 0)
    }
}

fn map_payment(row: &rusqlite::Row<'_>) -> rusqlite::Result<RecurringPayment> {
    Ok(RecurringPayment {
        id: PaymentId::from_raw(row.get(0)?),
        name: row.get(1)?,
        amount: Money::from_cents(row.get(2)?),
        due_date: parse_date(&row.get::<_, String>(3)?),
        frequency: Frequency::parse_lenient(&row.get::<_, String>(4)?),
        user_id: UserId::from_raw(row.get(5)?),
    })
}
