//! User repository

use rusqlite::{params, OptionalExtension};

use super::Db;
use crate::error::{CofferError, CofferResult};
use crate::models::{User, UserId};

/// Repository for account rows
pub struct UserRepository {
    db: Db,
}

impl UserRepository {
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a new account, returning its assigned id.
    ///
    /// A username collision surfaces as `Duplicate`.
    pub fn insert(&self, username: &str, password: &str) -> CofferResult<UserId> {
        let conn = self.db.connect()?;
        let result = conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password],
        );

        match result {
            Ok(_) => Ok(UserId::from_raw(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(CofferError::Duplicate {
                    entity_type: "User",
                    identifier: username.to_string(),
                })
            }
            Err(e) => Err(CofferError::from(e)),
        }
    }

    /// Look up an account by exact username/password match
    pub fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> CofferResult<Option<User>> {
        let conn = self.db.connect()?;
        conn.query_row(
            "SELECT id, username, password FROM users
             WHERE username = ?1 AND password = ?2",
            params![username, password],
            |row| {
                Ok(User {
                    id: UserId::from_raw(row.get(0)?),
                    username: row.get(1)?,
                    password: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(CofferError::from)
    }
}
