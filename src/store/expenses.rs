//! Expense repository

use chrono::NaiveDate;
use rusqlite::params;

use super::{format_date, parse_date, Db};
use crate::error::{CofferError, CofferResult};
use crate::models::{DailyTotal, Expense, ExpenseId, Money, UserId};

/// Repository for expense rows
pub struct ExpenseRepository {
    db: Db,
}

impl ExpenseRepository {
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn insert(
        &self,
        date: NaiveDate,
        category: &str,
        amount: Money,
        user_id: UserId,
    ) -> CofferResult<ExpenseId> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO expenses (date, category, amount, user_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![format_date(date), category, amount.cents(), user_id.as_raw()],
        )?;
        Ok(ExpenseId::from_raw(conn.last_insert_rowid()))
    }

    /// All of a user's expenses, newest first (ties broken by id so the
    /// register and its CSV export are stable)
    pub fn list_for_user(&self, user_id: UserId) -> CofferResult<Vec<Expense>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, category, amount, user_id FROM expenses
             WHERE user_id = ?1 ORDER BY date DESC, id ASC",
        )?;

        let rows = stmt.query_map(params![user_id.as_raw()], |row| {
            Ok(Expense {
                id: ExpenseId::from_raw(row.get(0)?),
                date: parse_date(&row.get::<_, String>(1)?),
                category: row.get(2)?,
                amount: Money::from_cents(row.get(3)?),
                user_id: UserId::from_raw(row.get(4)?),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(CofferError::from)
    }

    /// Total spending on or after `start`; zero when nothing matches
    pub fn spending_since(&self, start: NaiveDate, user_id: UserId) -> CofferResult<Money> {
        let conn = self.db.connect()?;
        let cents: i64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses
             WHERE date >= ?1 AND user_id = ?2",
            params![format_date(start), user_id.as_raw()],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(cents))
    }

    /// Per-day spending totals, oldest first (the chart series)
    pub fn daily_totals(&self, user_id: UserId) -> CofferResult<Vec<DailyTotal>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT date, SUM(amount) FROM expenses
             WHERE user_id = ?1 GROUP BY date ORDER BY date ASC",
        )?;

        let rows = stmt.query_map(params![user_id.as_raw()], |row| {
            Ok(DailyTotal {
                date: parse_date(&row.get::<_, String>(0)?),
                total: Money::from_cents(row.get(1)?),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(CofferError::from)
    }

    /// Overwrite an expense the user owns. Returns whether a row matched.
    pub fn update(
        &self,
        id: ExpenseId,
        date: NaiveDate,
        category: &str,
        amount: Money,
        user_id: UserId,
    ) -> CofferResult<bool> {
        let conn = self.db.connect()?;
        let updated = conn.execute(
            "UPDATE expenses SET date = ?1, category = ?2, amount = ?3
             WHERE id = ?4 AND user_id = ?5",
            params![
                format_date(date),
                category,
                amount.cents(),
                id.as_raw(),
                user_id.as_raw()
            ],
        )?;
        Ok(updated > 0)
    }

    /// Delete an expense the user owns. Returns whether a row matched.
    pub fn delete(&self, id: ExpenseId, user_id: UserId) -> CofferResult<bool> {
        let conn = self.db.connect()?;
        let deleted = conn.execute(
            "DELETE FROM expenses WHERE id = ?1 AND user_id = ?2",
            params![id.as_raw(), user_id.as_raw()],
        )?;
        Ok(deleted > 0)
    }
}
