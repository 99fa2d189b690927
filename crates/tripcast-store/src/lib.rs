//! SQLite-backed destination store.
//!
//! The uniqueness invariant lives in the schema: `name` carries a `UNIQUE`
//! constraint, so of two racing inserts the database admits exactly one and
//! the loser surfaces as a conflict. No application-level check-then-insert.

mod models;
mod sqlite;

pub use sqlite::{SqliteDestinationStore, StoreConfig};
