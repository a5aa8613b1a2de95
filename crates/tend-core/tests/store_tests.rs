//! End-to-end tests for the plant store over a real database file.

use jiff::civil::{date, datetime};
use tend_core::{
    params::{AddPlant, Id, RemovePlant, SetNotes, ToggleTask},
    PlantStoreBuilder, TaskId,
};

mod common;
use common::create_test_store;

#[tokio::test]
async fn test_full_plant_lifecycle() {
    let (_temp_dir, store) = create_test_store().await;

    // Start tracking a basil plant
    let plant = store
        .add_plant(&AddPlant {
            plan_id: 2,
            weight_kg: 0.5,
            start_date: Some(date(2026, 5, 1)),
        })
        .await
        .expect("Failed to add plant");
    assert_eq!(plant.name, "Basil");
    assert_eq!(plant.progress, 0);

    // 30 days in: 60-day upper bound means 50%, stage 2 of 4
    store
        .recalculate_all(date(2026, 5, 31))
        .await
        .expect("Failed to recalculate");
    let plant = store
        .get_plant(&Id { id: plant.id })
        .await
        .expect("Failed to get plant")
        .expect("Plant should exist");
    assert_eq!(plant.progress, 50);
    assert_eq!(plant.current_stage, 2);

    // Day 30 is an inspection day; the checklist carries it
    let checklist = store
        .checklist(&Id { id: plant.id }, datetime(2026, 5, 31, 7, 0, 0, 0))
        .await
        .expect("Failed to build checklist");
    assert!(checklist
        .items
        .iter()
        .any(|item| item.id() == TaskId::Inspection));

    // Mark the morning watering done and add a note
    store
        .toggle_task(&ToggleTask {
            plant_id: plant.id,
            task: TaskId::Watering { slot: 0 },
            date: Some(date(2026, 5, 31)),
        })
        .await
        .expect("Failed to toggle task");
    store
        .set_notes(&SetNotes {
            id: plant.id,
            notes: "Pinched off the first flower buds.".to_string(),
        })
        .await
        .expect("Failed to set notes");

    // Remove the plant once confirmed
    let removed = store
        .remove_plant(&RemovePlant {
            id: plant.id,
            confirmed: true,
        })
        .await
        .expect("Failed to remove plant");
    assert!(removed.is_some());
    assert!(store.list_plants().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_state_survives_store_reopen() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    {
        let store = PlantStoreBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to create store");
        let plant = store
            .add_plant(&AddPlant {
                plan_id: 4,
                weight_kg: 0.8,
                start_date: Some(date(2026, 4, 1)),
            })
            .await
            .expect("Failed to add plant");
        store
            .toggle_task(&ToggleTask {
                plant_id: plant.id,
                task: TaskId::Care { task_id: 1 },
                date: Some(date(2026, 4, 10)),
            })
            .await
            .expect("Failed to toggle task");
    }

    let store = PlantStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen store");
    let plants = store.list_plants().await.expect("Failed to list plants");
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Lettuce");
    assert!(plants[0].is_completed(date(2026, 4, 10), &TaskId::Care { task_id: 1 }));
}

#[tokio::test]
async fn test_marking_care_task_done_updates_last_done() {
    let (_temp_dir, store) = create_test_store().await;

    let plant = store
        .add_plant(&AddPlant {
            plan_id: 1,
            weight_kg: 2.0,
            start_date: Some(date(2026, 3, 1)),
        })
        .await
        .expect("Failed to add plant");
    assert_eq!(plant.tasks[0].last_done, date(2026, 3, 1));

    let updated = store
        .toggle_task(&ToggleTask {
            plant_id: plant.id,
            task: TaskId::Care { task_id: 1 },
            date: Some(date(2026, 3, 10)),
        })
        .await
        .expect("Failed to toggle task");

    let task = updated
        .tasks
        .iter()
        .find(|t| t.id == 1)
        .expect("task should exist");
    assert_eq!(task.last_done, date(2026, 3, 10));

    // Un-marking does not rewind the stamp
    let updated = store
        .toggle_task(&ToggleTask {
            plant_id: plant.id,
            task: TaskId::Care { task_id: 1 },
            date: Some(date(2026, 3, 10)),
        })
        .await
        .expect("Failed to toggle task back");
    let task = updated.tasks.iter().find(|t| t.id == 1).unwrap();
    assert_eq!(task.last_done, date(2026, 3, 10));
}

#[tokio::test]
async fn test_export_matches_original_document_shape() {
    let (_temp_dir, store) = create_test_store().await;

    store
        .add_plant(&AddPlant {
            plan_id: 1,
            weight_kg: 2.0,
            start_date: Some(date(2026, 3, 1)),
        })
        .await
        .expect("Failed to add plant");

    let exported = store.export_data().await.expect("Failed to export");
    let json = serde_json::to_value(&exported).expect("Failed to serialize");

    // Top-level keys and plant fields use the persisted camelCase names
    let plants = json
        .get("trackedPlants")
        .and_then(|v| v.as_array())
        .expect("trackedPlants should be an array");
    assert!(json.get("growthTips").is_some());
    let plant = &plants[0];
    assert_eq!(plant["planId"], 1);
    assert_eq!(plant["startDate"], "2026-03-01");
    assert!(plant["waterSchedule"].is_array());
    assert!(plant["taskCompletions"].is_object());
}
