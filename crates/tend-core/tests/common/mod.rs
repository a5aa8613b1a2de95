use tempfile::TempDir;
use tend_core::PlantStoreBuilder;

/// Helper function to create a test store
pub async fn create_test_store() -> (TempDir, tend_core::store::PlantStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = PlantStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}
