//! Expense model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// A single recorded expense
///
/// `category` is free text expected to name one of the owner's
/// categories; the link is by name, not by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub user_id: UserId,
}

/// Total spending on a single date, the point type of the chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}
