//! Recurring payment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::ids::{PaymentId, UserId};
use super::money::Money;

/// A payment that comes due on a rolling schedule
///
/// `due_date` always holds the next expected occurrence; marking the
/// payment paid (or the alert evaluator catching it overdue) advances it
/// by one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringPayment {
    pub id: PaymentId,
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub frequency: Frequency,
    pub user_id: UserId,
}
