//! CSV export of the expense register

use std::io::Write;

use crate::error::{CofferError, CofferResult};
use crate::models::UserId;
use crate::store::Store;

/// Export a user's expenses as CSV.
///
/// One row per expense in register order (most recent date first), after
/// a `ID,Date,Category,Amount` header. The caller chooses the
/// destination; anything `io::Write` works.
pub fn export_expenses_csv<W: Write>(
    store: &Store,
    user_id: UserId,
    writer: &mut W,
) -> CofferResult<()> {
    writeln!(writer, "ID,Date,Category,Amount")
        .map_err(|e| CofferError::Io(e.to_string()))?;

    let expenses = store.expenses.list_for_user(user_id)?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{:.2}",
            expense.id,
            expense.date,
            escape_csv(&expense.category),
            expense.amount.cents() as f64 / 100.0
        )
        .map_err(|e| CofferError::Io(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
