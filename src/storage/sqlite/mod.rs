//! SQLite-backed member store

mod convert;
mod members;
mod schema;
mod store;

pub use store::{SqliteConfig, SqliteStore};
