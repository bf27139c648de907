//! SQLite backend for the zakup tender store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Batch ingestion runs in a
//! single transaction with column-targeted `ON CONFLICT ... DO NOTHING`
//! inserts; only the declared unique constraint is suppressed.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
