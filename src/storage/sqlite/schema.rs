// File: src/storage/sqlite/schema.rs

use rusqlite::Connection;

use crate::error::ServerResult;

/// Create all tables (idempotent)
pub fn create_tables(conn: &Connection) -> ServerResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Member records: one row per person, parent_id is the only structural edge
CREATE TABLE IF NOT EXISTS members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    branch_name TEXT,
    parent_id INTEGER,
    image_url TEXT,
    gender TEXT,                            -- 'male' | 'female' | NULL
    birth_year INTEGER,
    death_year INTEGER,
    email TEXT,
    phone TEXT,
    is_alive INTEGER NOT NULL DEFAULT 1,
    created_at INTEGER NOT NULL             -- Unix nanoseconds
);

-- Indices for common queries
CREATE INDEX IF NOT EXISTS idx_members_parent ON members(parent_id);
CREATE INDEX IF NOT EXISTS idx_members_name ON members(full_name);
"#;
