//! Tests for the data models.

use std::collections::BTreeMap;

use jiff::civil::date;

use super::*;

fn sample_plant() -> TrackedPlant {
    TrackedPlant {
        id: 1,
        plan_id: 1,
        name: "Tomato".to_string(),
        variety: "Roma".to_string(),
        image: "🍅".to_string(),
        weight_kg: 2.0,
        start_date: date(2026, 3, 1),
        current_stage: 0,
        progress: 0,
        notes: String::new(),
        tasks: vec![RecurringTask {
            id: 1,
            name: "Water regularly".to_string(),
            frequency: "As needed".to_string(),
            last_done: date(2026, 3, 1),
            next_due: None,
        }],
        water_schedule: vec![WaterScheduleEntry {
            hour: 6,
            ml_per_kg: 300.0,
            amount_ml: 600,
        }],
        task_completions: BTreeMap::new(),
    }
}

#[test]
fn test_builtin_catalog_has_five_plans() {
    let catalog = GrowthPlanCatalog::builtin();
    assert_eq!(catalog.plans().len(), 5);
    assert!(catalog.get(1).is_some());
    assert!(catalog.get(5).is_some());
    assert!(catalog.get(6).is_none());
}

#[test]
fn test_builtin_catalog_stages_are_ordered_and_nonempty() {
    let catalog = GrowthPlanCatalog::builtin();
    for plan in catalog.plans() {
        assert!(!plan.stages.is_empty(), "plan {} has no stages", plan.id);
        assert!(!plan.water.is_empty(), "plan {} has no watering", plan.id);
    }
}

#[test]
fn test_tracked_plant_serde_uses_camel_case_keys() {
    let plant = sample_plant();
    let json = serde_json::to_value(&plant).unwrap();
    assert!(json.get("planId").is_some());
    assert!(json.get("weightKg").is_some());
    assert!(json.get("startDate").is_some());
    assert!(json.get("currentStage").is_some());
    assert!(json.get("waterSchedule").is_some());
    assert!(json.get("plan_id").is_none());
}

#[test]
fn test_tracked_plant_serde_round_trip() {
    let mut plant = sample_plant();
    plant
        .task_completions
        .entry(date(2026, 3, 2))
        .or_default()
        .insert(TaskId::Watering { slot: 0 }, true);

    let json = serde_json::to_string(&plant).unwrap();
    let back: TrackedPlant = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plant);
}

#[test]
fn test_completion_map_keys_are_canonical_strings() {
    let mut plant = sample_plant();
    plant
        .task_completions
        .entry(date(2026, 3, 2))
        .or_default()
        .insert(TaskId::Inspection, true);

    let json = serde_json::to_value(&plant).unwrap();
    let day = &json["taskCompletions"]["2026-03-02"];
    assert_eq!(day["disease-detection"], serde_json::Value::Bool(true));
}

#[test]
fn test_is_completed_defaults_to_false() {
    let plant = sample_plant();
    assert!(!plant.is_completed(date(2026, 3, 2), &TaskId::Watering { slot: 0 }));
}

#[test]
fn test_plant_summary_from_tracked_plant() {
    let plant = sample_plant();
    let summary = PlantSummary::from(&plant);
    assert_eq!(summary.id, plant.id);
    assert_eq!(summary.name, "Tomato");
    assert_eq!(summary.progress, 0);
    assert_eq!(summary.stage_name, None);
}
