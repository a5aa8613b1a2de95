//! Daily checklist derivation.
//!
//! Builds the ordered care checklist for a plant at an explicit as-of
//! instant: watering tasks from the resolved schedule, the periodic
//! disease-detection check, and the always-present recurring care
//! tasks. Completion flags are read from the plant's per-day map and
//! default to false.

use jiff::civil::DateTime;

use crate::models::{ChecklistItem, ChecklistTask, TrackedPlant};
use crate::progress::elapsed_days;

/// Days between scheduled disease-detection checks.
pub const INSPECTION_INTERVAL_DAYS: i64 = 15;

/// Hours either side of a scheduled watering during which it counts
/// as due.
pub const WATERING_DUE_WINDOW_HOURS: i8 = 2;

/// Whether a watering scheduled at `scheduled_hour` is due at
/// `hour_now`.
///
/// Uses the unsigned hour difference with no midnight wraparound:
/// hour 23 against hour 1 is 22 hours apart, not 2.
fn watering_due_now(scheduled_hour: i8, hour_now: i8) -> bool {
    (hour_now - scheduled_hour).abs() <= WATERING_DUE_WINDOW_HOURS
}

/// Whether the as-of date is a disease-detection day: a positive whole
/// multiple of the inspection interval since the start date. A missed
/// occurrence is not carried over to later days.
fn inspection_due(days_since_start: i64) -> bool {
    days_since_start > 0 && days_since_start % INSPECTION_INTERVAL_DAYS == 0
}

/// Derives the daily checklist for a plant at the given instant.
///
/// Order is stable: watering slots in schedule order, then the
/// inspection check when present, then recurring care tasks in list
/// order.
pub fn daily_checklist(plant: &TrackedPlant, as_of: DateTime) -> Vec<ChecklistItem> {
    let today = as_of.date();
    let hour_now = as_of.hour();

    let mut items = Vec::with_capacity(plant.water_schedule.len() + 1 + plant.tasks.len());

    for (slot, entry) in plant.water_schedule.iter().enumerate() {
        let task = ChecklistTask::Watering {
            slot,
            hour: entry.hour,
            amount_ml: entry.amount_ml,
        };
        items.push(ChecklistItem {
            completed: plant.is_completed(today, &task.id()),
            due_now: watering_due_now(entry.hour, hour_now),
            task,
        });
    }

    let days_since_start = elapsed_days(plant.start_date, today);
    if inspection_due(days_since_start) {
        let task = ChecklistTask::Inspection { days_since_start };
        items.push(ChecklistItem {
            completed: plant.is_completed(today, &task.id()),
            due_now: true,
            task,
        });
    }

    for recurring in &plant.tasks {
        let task = ChecklistTask::Care {
            task_id: recurring.id,
            name: recurring.name.clone(),
            frequency: recurring.frequency.clone(),
            last_done: recurring.last_done,
        };
        items.push(ChecklistItem {
            completed: plant.is_completed(today, &task.id()),
            due_now: false,
            task,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::civil::{date, datetime};

    use super::*;
    use crate::models::{RecurringTask, TaskId, WaterScheduleEntry};

    fn plant_with_schedule() -> TrackedPlant {
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
            tasks: vec![
                RecurringTask {
                    id: 1,
                    name: "Water regularly".to_string(),
                    frequency: "As needed".to_string(),
                    last_done: date(2026, 3, 1),
                    next_due: None,
                },
                RecurringTask {
                    id: 2,
                    name: "Check for disease signs".to_string(),
                    frequency: "Every 15 days".to_string(),
                    last_done: date(2026, 3, 1),
                    next_due: Some(date(2026, 3, 16)),
                },
            ],
            water_schedule: vec![
                WaterScheduleEntry {
                    hour: 6,
                    ml_per_kg: 300.0,
                    amount_ml: 600,
                },
                WaterScheduleEntry {
                    hour: 17,
                    ml_per_kg: 200.0,
                    amount_ml: 400,
                },
            ],
            task_completions: BTreeMap::new(),
        }
    }

    #[test]
    fn test_checklist_order_and_ids() {
        let plant = plant_with_schedule();
        // Day 15: inspection appears between watering and care tasks
        let items = daily_checklist(&plant, datetime(2026, 3, 16, 8, 0, 0, 0));
        let ids: Vec<String> = items.iter().map(|i| i.id().to_string()).collect();
        assert_eq!(
            ids,
            vec!["water-0", "water-1", "disease-detection", "task-1", "task-2"]
        );
    }

    #[test]
    fn test_watering_due_within_two_hours() {
        let plant = plant_with_schedule();
        let items = daily_checklist(&plant, datetime(2026, 3, 2, 8, 0, 0, 0));
        // Scheduled 6, now 8: due. Scheduled 17, now 8: not due.
        assert!(items[0].due_now);
        assert!(!items[1].due_now);
    }

    #[test]
    fn test_watering_due_window_boundaries() {
        let plant = plant_with_schedule();
        // Exactly 2 hours before the 6 AM slot
        let items = daily_checklist(&plant, datetime(2026, 3, 2, 4, 0, 0, 0));
        assert!(items[0].due_now);
        // 3 hours before
        let items = daily_checklist(&plant, datetime(2026, 3, 2, 3, 0, 0, 0));
        assert!(!items[0].due_now);
    }

    #[test]
    fn test_watering_window_does_not_wrap_midnight() {
        let mut plant = plant_with_schedule();
        plant.water_schedule = vec![WaterScheduleEntry {
            hour: 23,
            ml_per_kg: 100.0,
            amount_ml: 200,
        }];
        // 1 AM is 22 hours from hour 23 under the unsigned difference,
        // so the slot is not due even though the clock distance is 2.
        let items = daily_checklist(&plant, datetime(2026, 3, 2, 1, 0, 0, 0));
        assert!(!items[0].due_now);
    }

    #[test]
    fn test_inspection_absent_on_day_fourteen() {
        let plant = plant_with_schedule();
        let items = daily_checklist(&plant, datetime(2026, 3, 15, 8, 0, 0, 0));
        assert!(!items.iter().any(|i| i.id() == TaskId::Inspection));
    }

    #[test]
    fn test_inspection_present_on_day_fifteen_and_thirty() {
        let plant = plant_with_schedule();
        for day in [date(2026, 3, 16), date(2026, 3, 31)] {
            let items = daily_checklist(&plant, day.at(8, 0, 0, 0));
            let inspection = items
                .iter()
                .find(|i| i.id() == TaskId::Inspection)
                .expect("inspection should be present");
            assert!(inspection.due_now);
        }
    }

    #[test]
    fn test_inspection_absent_on_start_day() {
        let plant = plant_with_schedule();
        let items = daily_checklist(&plant, datetime(2026, 3, 1, 8, 0, 0, 0));
        assert!(!items.iter().any(|i| i.id() == TaskId::Inspection));
    }

    #[test]
    fn test_inspection_reports_days_since_start() {
        let plant = plant_with_schedule();
        let items = daily_checklist(&plant, datetime(2026, 3, 31, 8, 0, 0, 0));
        let inspection = items
            .iter()
            .find(|i| i.id() == TaskId::Inspection)
            .unwrap();
        match &inspection.task {
            ChecklistTask::Inspection { days_since_start } => {
                assert_eq!(*days_since_start, 30);
            }
            other => panic!("Expected inspection task, got {other:?}"),
        }
    }

    #[test]
    fn test_care_tasks_always_present() {
        let plant = plant_with_schedule();
        // An arbitrary day with no inspection
        let items = daily_checklist(&plant, datetime(2026, 3, 5, 12, 0, 0, 0));
        let care_ids: Vec<TaskId> = items
            .iter()
            .filter(|i| matches!(i.task, ChecklistTask::Care { .. }))
            .map(|i| i.id())
            .collect();
        assert_eq!(
            care_ids,
            vec![TaskId::Care { task_id: 1 }, TaskId::Care { task_id: 2 }]
        );
    }

    #[test]
    fn test_completion_flags_read_per_day() {
        let mut plant = plant_with_schedule();
        plant
            .task_completions
            .entry(date(2026, 3, 2))
            .or_default()
            .insert(TaskId::Watering { slot: 0 }, true);

        let items = daily_checklist(&plant, datetime(2026, 3, 2, 8, 0, 0, 0));
        assert!(items[0].completed);
        assert!(!items[1].completed);

        // A different day does not see the completion
        let items = daily_checklist(&plant, datetime(2026, 3, 3, 8, 0, 0, 0));
        assert!(!items[0].completed);
    }
}
