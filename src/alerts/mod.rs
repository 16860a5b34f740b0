//! Alert evaluation
//!
//! A pass over one user's data that surfaces what needs attention:
//! recurring payments due today or tomorrow, and spending past the
//! month's budget. Overdue payments are silently rolled forward one
//! period as a side effect of the pass; they are not marked as paid and
//! produce no alert.
//!
//! The host invokes a pass on a daily cadence (see [`TickScheduler`])
//! and once right after login.

pub mod scheduler;

pub use scheduler::TickScheduler;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CofferResult;
use crate::models::{Money, Month, UserId};
use crate::store::Store;

/// A non-blocking notification for the presentation layer to surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    PaymentDueTomorrow { name: String, amount: Money },
    PaymentDueToday { name: String, amount: Money },
    BudgetExceeded { month: Month, budget: Money, spent: Money },
}

/// Evaluates alerts for a user as of a given day
pub struct AlertEvaluator<'a> {
    store: &'a Store,
}

impl<'a> AlertEvaluator<'a> {
    /// Create a new alert evaluator
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Run one full pass for the user as of `today`
    pub fn run(&self, user_id: UserId, today: NaiveDate) -> CofferResult<Vec<Alert>> {
        let mut alerts = self.check_recurring_payments(user_id, today)?;
        alerts.extend(self.check_budget(user_id, today)?);
        Ok(alerts)
    }

    fn check_recurring_payments(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> CofferResult<Vec<Alert>> {
        let mut alerts = Vec::new();

        for payment in self.store.recurring.list_for_user(user_id)? {
            let days_until_due = (payment.due_date - today).num_days();

            if days_until_due == 1 {
                tracing::info!(payment = %payment.name, "payment due tomorrow");
                alerts.push(Alert::PaymentDueTomorrow {
                    name: payment.name,
                    amount: payment.amount,
                });
            } else if days_until_due == 0 {
                tracing::info!(payment = %payment.name, "payment due today");
                alerts.push(Alert::PaymentDueToday {
                    name: payment.name,
                    amount: payment.amount,
                });
            } else if days_until_due < 0 {
                // A missed payment rolls forward one period from its
                // stored due date; it is not marked as paid.
                match payment.frequency.next_due_date(payment.due_date) {
                    Some(next_due) => {
                        self.store
                            .recurring
                            .update_due_date(payment.id, next_due, user_id)?;
                        tracing::info!(
                            payment = %payment.name,
                            %next_due,
                            "advanced overdue payment"
                        );
                    }
                    None => {
                        tracing::warn!(
                            payment = %payment.name,
                            due_date = %payment.due_date,
                            "overdue payment has no valid next due date; leaving it"
                        );
                    }
                }
            }
        }

        Ok(alerts)
    }

    fn check_budget(&self, user_id: UserId, today: NaiveDate) -> CofferResult<Option<Alert>> {
        let month = Month::from_date(today);

        let Some(budget) = self.store.budgets.get(month, user_id)? else {
            return Ok(None);
        };

        let spent = self
            .store
            .expenses
            .spending_since(month.first_day(), user_id)?;

        // Strictly over: spending equal to the budget is still on budget
        if spent > budget {
            tracing::warn!(%month, %budget, %spent, "budget exceeded");
            Ok(Some(Alert::BudgetExceeded {
                month,
                budget,
                spent,
            }))
        } else {
            Ok(None)
        }
    }
}
