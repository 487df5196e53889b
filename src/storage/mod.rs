//! Storage implementations: SQLite member store, filesystem photo store

pub mod photos;
pub mod sqlite;

pub use photos::FsPhotoStore;
pub use sqlite::SqliteStore;
