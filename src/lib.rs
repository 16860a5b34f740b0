//! coffer - personal finance tracker core
//!
//! This library is the domain core of a single-user personal finance
//! tracker: SQLite-backed accounts, spending categories, expenses,
//! recurring payments and monthly budgets, plus due-date rollover,
//! alerting, and CSV export. The presentation layer (forms, charts,
//! dialogs) lives outside this crate and consumes the service
//! signatures.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data-directory and database-path resolution
//! - `error`: custom error types
//! - `models`: core data models (money, months, expenses, payments, ...)
//! - `store`: SQLite storage layer
//! - `services`: business logic layer
//! - `alerts`: due-payment and budget-overrun evaluation + scheduling
//! - `export`: CSV export of the expense register
//!
//! # Example
//!
//! ```rust,ignore
//! use coffer::config::CofferPaths;
//! use coffer::services::UserService;
//! use coffer::store::Store;
//!
//! let store = Store::open(&CofferPaths::new()?)?;
//! let session = UserService::new(&store).authenticate("alice", "secret")?;
//! ```
//!
//! # Security
//!
//! Passwords are stored and compared as plain text, carried over from
//! the data this tracker replaces. Hash credentials before using this
//! anywhere that matters.

pub mod alerts;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod store;

pub use error::{CofferError, CofferResult};
