//! Builder for creating and configuring PlantStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::PlantStore;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::GrowthPlanCatalog,
};

/// Builder for creating and configuring PlantStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlantStoreBuilder {
    database_path: Option<PathBuf>,
    catalog: Option<GrowthPlanCatalog>,
}

impl PlantStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tend/tend.db` or `~/.local/share/tend/tend.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Supplies the growth plan catalog. Defaults to the built-in
    /// catalog when not set.
    pub fn with_catalog(mut self, catalog: GrowthPlanCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured store instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database path is invalid
    /// Returns `TrackerError::Storage` if database initialization fails
    pub async fn build(self) -> Result<PlantStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let catalog = self.catalog.unwrap_or_default();
        Ok(PlantStore::new(db_path, catalog))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tend")
            .place_data_file("tend.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
