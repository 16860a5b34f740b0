//! Category service

use crate::error::{CofferError, CofferResult};
use crate::models::{Category, UserId};
use crate::store::Store;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a Store,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new category for the user.
    ///
    /// Fails with `Duplicate` when the user already has a category of
    /// that name.
    pub fn add(&self, name: &str, user_id: UserId) -> CofferResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CofferError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        let id = self.store.categories.insert(name, user_id)?;
        tracing::info!(%user_id, category = name, "added category");

        Ok(Category {
            id,
            name: name.to_string(),
            user_id,
        })
    }

    /// List the user's categories, alphabetically ordered
    pub fn list(&self, user_id: UserId) -> CofferResult<Vec<Category>> {
        self.store.categories.list_for_user(user_id)
    }

    /// Delete the named category.
    ///
    /// Deleting a name the user does not have is a silent no-op; the
    /// return value reports whether anything was removed.
    pub fn delete(&self, name: &str, user_id: UserId) -> CofferResult<bool> {
        let removed = self.store.categories.delete_by_name(name, user_id)?;
        if removed {
            tracing::info!(%user_id, category = name, "deleted category");
        }
        Ok(removed)
    }
}
