//! Typed accessors over the key-value table.

use std::collections::BTreeMap;

use rusqlite::{params, OptionalExtension};

use crate::error::{Result, StorageResultExt};
use crate::models::TrackedPlant;

use super::{PLANTS_KEY, TIPS_KEY};

const SELECT_KV_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_KV_SQL: &str =
    "INSERT INTO kv (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_KV_SQL: &str = "DELETE FROM kv WHERE key = ?1";

impl super::Database {
    /// Reads the raw JSON document stored under a key, if any.
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_KV_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read key")
    }

    /// Replaces the document stored under a key.
    fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_KV_SQL, params![key, value])
            .storage_context("Failed to write key")?;
        Ok(())
    }

    /// Deletes the document stored under a key.
    fn delete_raw(&self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_KV_SQL, params![key])
            .storage_context("Failed to delete key")?;
        Ok(())
    }

    /// Loads the ordered list of tracked plants. A missing key yields
    /// an empty list.
    pub fn load_plants(&self) -> Result<Vec<TrackedPlant>> {
        match self.read_raw(PLANTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the stored plant list wholesale.
    pub fn save_plants(&self, plants: &[TrackedPlant]) -> Result<()> {
        let json = serde_json::to_string(plants)?;
        self.write_raw(PLANTS_KEY, &json)
    }

    /// Loads the plant ID → tip text mapping. A missing key yields an
    /// empty map.
    pub fn load_tips(&self) -> Result<BTreeMap<u64, String>> {
        match self.read_raw(TIPS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Replaces the stored tip mapping wholesale.
    pub fn save_tips(&self, tips: &BTreeMap<u64, String>) -> Result<()> {
        let json = serde_json::to_string(tips)?;
        self.write_raw(TIPS_KEY, &json)
    }

    /// Removes both logical keys, wiping all user data.
    pub fn clear_all(&self) -> Result<()> {
        self.delete_raw(PLANTS_KEY)?;
        self.delete_raw(TIPS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::super::Database;
    use crate::models::TrackedPlant;

    fn open_test_db() -> (TempDir, Database) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open db");
        (temp_dir, db)
    }

    fn minimal_plant(id: u64) -> TrackedPlant {
        TrackedPlant {
            id,
            plan_id: 1,
            name: "Lettuce".to_string(),
            variety: "Butterhead".to_string(),
            image: "🥬".to_string(),
            weight_kg: 0.8,
            start_date: date(2026, 4, 1),
            current_stage: 0,
            progress: 0,
            notes: String::new(),
            tasks: vec![],
            water_schedule: vec![],
            task_completions: Default::default(),
        }
    }

    #[test]
    fn test_missing_keys_yield_empty_collections() {
        let (_dir, db) = open_test_db();
        assert!(db.load_plants().unwrap().is_empty());
        assert!(db.load_tips().unwrap().is_empty());
    }

    #[test]
    fn test_plants_round_trip_preserves_order() {
        let (_dir, db) = open_test_db();
        let plants = vec![minimal_plant(2), minimal_plant(1)];
        db.save_plants(&plants).unwrap();
        let loaded = db.load_plants().unwrap();
        assert_eq!(loaded, plants);
    }

    #[test]
    fn test_tips_round_trip() {
        let (_dir, db) = open_test_db();
        let mut tips = std::collections::BTreeMap::new();
        tips.insert(1, "## Watering\nKeep soil moist.".to_string());
        db.save_tips(&tips).unwrap();
        assert_eq!(db.load_tips().unwrap(), tips);
    }

    #[test]
    fn test_clear_all_removes_both_keys() {
        let (_dir, db) = open_test_db();
        db.save_plants(&[minimal_plant(1)]).unwrap();
        let mut tips = std::collections::BTreeMap::new();
        tips.insert(1, "tip".to_string());
        db.save_tips(&tips).unwrap();

        db.clear_all().unwrap();
        assert!(db.load_plants().unwrap().is_empty());
        assert!(db.load_tips().unwrap().is_empty());
    }
}
