//! Database module: schema and row access for persistent storage.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: row-level access to the `users` table

pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, UserStorage, connect};
