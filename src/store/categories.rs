//! Category repository

use rusqlite::params;

use super::Db;
use crate::error::{CofferError, CofferResult};
use crate::models::{Category, CategoryId, UserId};

/// Repository for per-user category rows
pub struct CategoryRepository {
    db: Db,
}

impl CategoryRepository {
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a category for a user.
    ///
    /// Name uniqueness is scoped to the user; a collision surfaces as
    /// `Duplicate`.
    pub fn insert(&self, name: &str, user_id: UserId) -> CofferResult<CategoryId> {
        let conn = self.db.connect()?;
        let result = conn.execute(
            "INSERT INTO categories (name, user_id) VALUES (?1, ?2)",
            params![name, user_id.as_raw()],
        );

        match result {
            Ok(_) => Ok(CategoryId::from_raw(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(CofferError::Duplicate {
                    entity_type: "Category",
                    identifier: name.to_string(),
                })
            }
            Err(e) => Err(CofferError::from(e)),
        }
    }

    /// All of a user's categories, alphabetical
    pub fn list_for_user(&self, user_id: UserId) -> CofferResult<Vec<Category>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, user_id FROM categories
             WHERE user_id = ?1 ORDER BY name ASC",
        )?;

        let rows = stmt.query_map(params![user_id.as_raw()], |row| {
            Ok(Category {
                id: CategoryId::from_raw(row.get(0)?),
                name: row.get(1)?,
                user_id: UserId::from_raw(row.get(2)?),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(CofferError::from)
    }

    /// Delete a user's category by name. Returns whether a row matched.
    pub fn delete_by_name(&self, name: &str, user_id: UserId) -> CofferResult<bool> {
        let conn = self.db.connect()?;
        let deleted = conn.execute(
            "DELETE FROM categories WHERE name = ?1 AND user_id = ?2",
            params![name, user_id.as_raw()],
        )?;
        Ok(deleted > 0)
    }
}
