//! Key-value persistence for tracked plants and growth tips.
//!
//! The store treats persistence as an opaque key-value collaborator:
//! one SQLite table with two logical keys, `trackedPlants` (the
//! ordered list of plant records) and `growthTips` (plant ID →
//! markdown text). Documents are read whole and written whole after
//! every mutation; there is no batching and no partial write.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StorageResultExt};

pub mod kv;

/// Storage key for the ordered list of tracked plant records.
pub const PLANTS_KEY: &str = "trackedPlants";

/// Storage key for the plant ID → tip text mapping.
pub const TIPS_KEY: &str = "growthTips";

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute(SCHEMA_SQL, [])
            .storage_context("Failed to initialize database schema")?;
        Ok(())
    }
}
