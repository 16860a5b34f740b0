//! User service
//!
//! Registration and login. Authenticating produces a [`Session`] that the
//! caller passes to every other service, rather than the application
//! keeping ambient logged-in state.

use crate::error::{CofferError, CofferResult};
use crate::models::UserId;
use crate::store::Store;

/// An authenticated user
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
}

/// Service for account registration and login
pub struct UserService<'a> {
    store: &'a Store,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a new account and return its id.
    ///
    /// Fails with `Duplicate` when the username is already taken.
    pub fn register(&self, username: &str, password: &str) -> CofferResult<UserId> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CofferError::Validation("Username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(CofferError::Validation("Password cannot be empty".into()));
        }

        let id = self.store.users.insert(username, password)?;
        tracing::info!(username, %id, "registered new user");
        Ok(id)
    }

    /// Check credentials and open a session on an exact match.
    ///
    /// A mismatch returns `None`, not an error. Credentials are compared
    /// as stored plain text; acceptable only for a local single-user
    /// prototype (see [`crate::models::User`]).
    pub fn authenticate(&self, username: &str, password: &str) -> CofferResult<Option<Session>> {
        let user = self.store.users.find_by_credentials(username, password)?;

        Ok(user.map(|user| {
            tracing::info!(username = %user.username, "user authenticated");
            Session {
                user_id: user.id,
                username: user.username,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open_at(temp_dir.path().join("coffer.db")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_register_then_authenticate() {
        let (_temp_dir, store) = create_test_store();
        let service = UserService::new(&store);

        let id = service.register("alice", "p1").unwrap();

        let session = service.authenticate("alice", "p1").unwrap().unwrap();
        assert_eq!(session.user_id, id);
        assert_eq!(session.username, "alice");
    }

    #[test]
    fn test_register_duplicate_username() {
        let (_temp_dir, store) = create_test_store();
        let service = UserService::new(&store);

        service.register("alice", "p1").unwrap();
        let err = service.register("alice", "p2").unwrap_err();
        assert!(err.is_duplicate());

        // The original credentials still work
        assert!(service.authenticate("alice", "p1").unwrap().is_some());
    }

    #[test]
    fn test_authenticate_mismatch_is_none() {
        let (_temp_dir, store) = create_test_store();
        let service = UserService::new(&store);

        service.register("alice", "p1").unwrap();

        assert!(service.authenticate("alice", "wrong").unwrap().is_none());
        assert!(service.authenticate("nobody", "p1").unwrap().is_none());
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let (_temp_dir, store) = create_test_store();
        let service = UserService::new(&store);

        assert!(service.register("  ", "p1").unwrap_err().is_validation());
        assert!(service.register("alice", "").unwrap_err().is_validation());
    }
}
