use tempfile::NamedTempFile;
use tend_core::Database;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();

    // Database should be initialized and ready to use
    assert!(temp_file.path().exists());
}

#[test]
fn test_reopen_preserves_data() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    {
        let db = Database::new(temp_file.path()).expect("Failed to create database");
        let mut tips = std::collections::BTreeMap::new();
        tips.insert(3, "Mulch around the base.".to_string());
        db.save_tips(&tips).expect("Failed to save tips");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let tips = db.load_tips().expect("Failed to load tips");
    assert_eq!(tips.get(&3).map(String::as_str), Some("Mulch around the base."));
}

#[test]
fn test_save_overwrites_previous_document() {
    let (_temp_file, db) = create_test_db();

    let mut tips = std::collections::BTreeMap::new();
    tips.insert(1, "first".to_string());
    tips.insert(2, "second".to_string());
    db.save_tips(&tips).expect("Failed to save tips");

    tips.remove(&2);
    db.save_tips(&tips).expect("Failed to save tips again");

    let loaded = db.load_tips().expect("Failed to load tips");
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_key(&1));
}
