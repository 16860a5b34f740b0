//! One-shot repair for databases that predate per-user ownership
//!
//! Early versions of the tracker kept a single implicit user and no
//! `user_id` column on the child tables. On open, any such table gets the
//! column added and its rows assigned to a fallback user, which is
//! created on demand so the rows always reference a real account.

use rusqlite::{params, Connection};

use crate::error::CofferResult;

const LEGACY_TABLES: &[&str] = &["categories", "expenses", "recurring_payments", "budgets"];

const FALLBACK_USER_ID: i64 = 1;

pub(crate) fn repair_missing_user_columns(conn: &Connection) -> CofferResult<()> {
    for table in LEGACY_TABLES {
        if has_column(conn, table, "user_id")? {
            continue;
        }

        ensure_fallback_user(conn)?;
        conn.execute_batch(&format!(
            "ALTER TABLE {table} ADD COLUMN user_id INTEGER NOT NULL DEFAULT {FALLBACK_USER_ID};
             UPDATE {table} SET user_id = {FALLBACK_USER_ID};"
        ))?;
        tracing::info!(table, "added user_id column and assigned rows to the fallback user");
    }
    Ok(())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> CofferResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ensure_fallback_user(conn: &Connection) -> CofferResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO users (id, username, password)
         VALUES (?1, 'default_user', 'password123')",
        params![FALLBACK_USER_ID],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::TempDir;

    #[test]
    fn test_repairs_legacy_table() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("legacy.db");

        // A pre-ownership expenses table with one row
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE expenses (
                     id INTEGER PRIMARY KEY AUTOINCREMENT,
                     date TEXT NOT NULL,
                     category TEXT NOT NULL,
                     amount INTEGER NOT NULL
                 );
                 INSERT INTO expenses (date, category, amount)
                 VALUES ('2023-11-02', 'Groceries', 1250);",
            )
            .unwrap();
        }

        let store = Store::open_at(&db_path).unwrap();

        // The orphaned row now belongs to the fallback user
        let expenses = store
            .expenses
            .list_for_user(crate::models::UserId::from_raw(FALLBACK_USER_ID))
            .unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "Groceries");

        // ...and the fallback user is a real account
        let user = store
            .users
            .find_by_credentials("default_user", "password123")
            .unwrap();
        assert_eq!(user.unwrap().id.as_raw(), FALLBACK_USER_ID);
    }

    #[test]
    fn test_leaves_current_schema_alone() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("current.db");

        let store = Store::open_at(&db_path).unwrap();
        drop(store);
        let store = Store::open_at(&db_path).unwrap();

        // No fallback user materializes for a freshly created database
        let user = store
            .users
            .find_by_credentials("default_user", "password123")
            .unwrap();
        assert!(user.is_none());
    }
}
