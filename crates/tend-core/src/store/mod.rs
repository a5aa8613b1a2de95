//! High-level store API for managing tracked plants.
//!
//! The [`PlantStore`] is the single writer over the plant collection.
//! It coordinates the pure calculators (progress, schedule,
//! completion) with the key-value persistence layer:
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   PlantStore    │    │  Calculators     │    │    Database     │
//! │ (plant_ops,     │───▶│ (progress,       │    │   (via db/)     │
//! │  data_ops)      │    │  schedule,       │───▶│                 │
//! └─────────────────┘    │  completion)     │    └─────────────────┘
//!                        └──────────────────┘
//! ```
//!
//! Every mutation validates its input before touching state, applies
//! the change to a fresh snapshot, and writes the whole document back
//! through. Persistence failure is fatal to the in-flight operation;
//! there is no internal retry.

use std::path::PathBuf;

use tokio::task;

use crate::db::Database;
use crate::error::{Result, TrackerError};
use crate::models::GrowthPlanCatalog;

pub mod builder;
pub mod data_ops;
pub mod plant_ops;


// Re-export the main types
pub use builder::PlantStoreBuilder;
pub use data_ops::UserData;

/// Main store interface owning the collection of tracked plants.
pub struct PlantStore {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: GrowthPlanCatalog,
}

impl PlantStore {
    /// Creates a new store with the given database path and catalog.
    pub(crate) fn new(db_path: PathBuf, catalog: GrowthPlanCatalog) -> Self {
        Self { db_path, catalog }
    }

    /// The read-only growth plan catalog this store resolves against.
    pub fn catalog(&self) -> &GrowthPlanCatalog {
        &self.catalog
    }

    /// Runs a closure against a fresh database connection on the
    /// blocking thread pool.
    pub(crate) async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            op(db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
