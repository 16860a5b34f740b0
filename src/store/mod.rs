//! SQLite storage layer for coffer
//!
//! Every logical operation opens its own connection, performs one
//! statement (or a short check-then-write pair), and releases the
//! connection when it drops. There is no pooling and no cross-operation
//! transaction: the store is a local file serving one user at
//! personal scale.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod migrate;
pub mod recurring;
pub mod schema;
pub mod users;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use recurring::RecurringPaymentRepository;
pub use users::UserRepository;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::paths::CofferPaths;
use crate::error::{CofferError, CofferResult};

/// Handle to the database file
///
/// Cloned freely between repositories; each `connect` call opens a fresh
/// connection with foreign keys enforced.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open a scoped connection for one logical operation
    pub(crate) fn connect(&self) -> CofferResult<Connection> {
        let conn = Connection::open(&self.path).map_err(|e| {
            CofferError::Storage(format!("failed to open {}: {}", self.path.display(), e))
        })?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Store {
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub expenses: ExpenseRepository,
    pub recurring: RecurringPaymentRepository,
    pub budgets: BudgetRepository,
}

impl Store {
    /// Open the store under the standard data directory, creating the
    /// schema if absent and repairing tables that predate per-user
    /// ownership.
    pub fn open(paths: &CofferPaths) -> CofferResult<Self> {
        paths.ensure_directories()?;
        Self::open_at(paths.database_file())
    }

    /// Open the store at an explicit database path
    ///
    /// Safe to call on every startup; schema creation is idempotent.
    pub fn open_at(path: impl AsRef<Path>) -> CofferResult<Self> {
        let db = Db::new(path.as_ref().to_path_buf());

        {
            let conn = db.connect()?;
            conn.execute_batch(schema::SCHEMA)?;
            migrate::repair_missing_user_columns(&conn)?;
        }

        Ok(Self {
            users: UserRepository::new(db.clone()),
            categories: CategoryRepository::new(db.clone()),
            expenses: ExpenseRepository::new(db.clone()),
            recurring: RecurringPaymentRepository::new(db.clone()),
            budgets: BudgetRepository::new(db),
        })
    }
}

/// Parse a stored ISO date, falling back to the epoch on corrupt rows
pub(crate) fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        tracing::error!("invalid date in database: '{}' - {}", s, e);
        NaiveDate::default()
    })
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
