//! User account model
//!
//! The password field holds the credential exactly as supplied at
//! registration and is compared verbatim at login. That is a carryover
//! from the data this tracker replaces, not a recommendation: hash
//! credentials before trusting this with anything real.

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A registered account. Accounts are created once and never updated or
/// deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Plain-text credential (see module note)
    pub password: String,
}
