//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are assigned by the store (SQLite rowids). The newtype wrappers
//! prevent accidentally mixing up IDs from different entity types at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database id
            pub const fn from_raw(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw database id
            pub const fn as_raw(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(UserId);
define_id!(CategoryId);
define_id!(ExpenseId);
define_id!(PaymentId);
