// File: src/storage/sqlite/store.rs

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use super::schema;
use crate::error::{ServerError, ServerResult, StorageError};
use crate::traits::{Member, MemberStore, NewMember};

/// SQLite connection configuration
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub path: String,
    pub wal_mode: bool,
    pub busy_timeout_ms: u32,
    pub foreign_keys: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: "./kintree.db".to_string(),
            wal_mode: true,
            busy_timeout_ms: 5000,
            foreign_keys: true,
        }
    }
}

/// SQLite implementation of the MemberStore trait
pub struct SqliteStore {
    /// Database connection (protected by mutex for thread safety)
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn new<P: AsRef<Path>>(path: P) -> ServerResult<Self> {
        let config = SqliteConfig {
            path: path.as_ref().to_string_lossy().to_string(),
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Create with custom configuration
    pub fn with_config(config: SqliteConfig) -> ServerResult<Self> {
        let conn = Connection::open(&config.path).map_err(|e| {
            ServerError::from(StorageError::ConnectionFailed(format!(
                "failed to open db: {e}"
            )))
        })?;

        Self::configure_connection(&conn, &config)?;
        schema::create_tables(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> ServerResult<Self> {
        let config = SqliteConfig {
            path: ":memory:".to_string(),
            wal_mode: false,
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Configure SQLite connection pragmas
    fn configure_connection(conn: &Connection, config: &SqliteConfig) -> ServerResult<()> {
        if config.wal_mode {
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }
        conn.pragma_update(None, "busy_timeout", config.busy_timeout_ms)?;
        if config.foreign_keys {
            conn.pragma_update(None, "foreign_keys", "ON")?;
        }
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(())
    }

    /// Get locked connection for internal operations
    pub(crate) fn get_conn(&self) -> ServerResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            ServerError::from(StorageError::ConnectionFailed("lock poisoned".into()))
        })
    }
}

impl MemberStore for SqliteStore {
    fn get(&self, id: i64) -> ServerResult<Member> {
        self.get_impl(id)
    }

    fn list_all(&self) -> ServerResult<Vec<Member>> {
        self.list_all_impl()
    }

    fn insert(&self, new: &NewMember) -> ServerResult<Member> {
        self.insert_impl(new)
    }

    fn update(&self, member: &Member) -> ServerResult<Member> {
        self.update_impl(member)
    }

    fn delete(&self, id: i64) -> ServerResult<()> {
        self.delete_impl(id)
    }

    fn set_image_url(&self, id: i64, url: Option<&str>) -> ServerResult<Member> {
        self.set_image_url_impl(id, url)
    }
}
