//! Idempotent per-day task completion tracking.
//!
//! Toggles produce a new plant value rather than mutating in place,
//! so callers can diff the result against the stored record and decide
//! whether to persist.

use jiff::civil::Date;

use crate::models::{TaskId, TrackedPlant};

/// Flips the completion flag for a task on a given date and returns
/// the updated plant.
///
/// A flag with no prior record counts as false, so the first toggle
/// always marks the task done. When a recurring care task transitions
/// false → true, that task's `last_done` is stamped with the date; no
/// other transition touches task metadata. Toggling the same task and
/// date twice restores the original state.
pub fn toggle_completion(plant: &TrackedPlant, task: &TaskId, date: Date) -> TrackedPlant {
    let mut updated = plant.clone();

    let was_completed = plant.is_completed(date, task);
    let now_completed = !was_completed;

    updated
        .task_completions
        .entry(date)
        .or_default()
        .insert(*task, now_completed);

    if let TaskId::Care { task_id } = task {
        if now_completed {
            if let Some(recurring) = updated.tasks.iter_mut().find(|t| t.id == *task_id) {
                recurring.last_done = date;
            }
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::civil::date;

    use super::*;
    use crate::models::RecurringTask;

    fn plant_with_care_task() -> TrackedPlant {
        TrackedPlant {
            id: 1,
            plan_id: 1,
            name: "Basil".to_string(),
            variety: "Sweet Basil".to_string(),
            image: "🌿".to_string(),
            weight_kg: 0.5,
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
            water_schedule: vec![],
            task_completions: BTreeMap::new(),
        }
    }

    #[test]
    fn test_first_toggle_marks_done() {
        let plant = plant_with_care_task();
        let task = TaskId::Watering { slot: 0 };
        let day = date(2026, 3, 5);

        let updated = toggle_completion(&plant, &task, day);
        assert!(updated.is_completed(day, &task));
        // The input plant is untouched
        assert!(!plant.is_completed(day, &task));
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let plant = plant_with_care_task();
        let task = TaskId::Inspection;
        let day = date(2026, 3, 16);

        let once = toggle_completion(&plant, &task, day);
        let twice = toggle_completion(&once, &task, day);
        assert!(!twice.is_completed(day, &task));
    }

    #[test]
    fn test_care_toggle_stamps_last_done() {
        let plant = plant_with_care_task();
        let day = date(2026, 3, 10);

        let updated = toggle_completion(&plant, &TaskId::Care { task_id: 1 }, day);
        assert_eq!(updated.tasks[0].last_done, day);
    }

    #[test]
    fn test_care_untoggle_leaves_last_done() {
        let plant = plant_with_care_task();
        let day = date(2026, 3, 10);

        let done = toggle_completion(&plant, &TaskId::Care { task_id: 1 }, day);
        // true -> false must not rewrite task metadata
        let undone = toggle_completion(&done, &TaskId::Care { task_id: 1 }, day);
        assert_eq!(undone.tasks[0].last_done, day);
        assert!(!undone.is_completed(day, &TaskId::Care { task_id: 1 }));
    }

    #[test]
    fn test_non_care_toggle_leaves_task_metadata() {
        let plant = plant_with_care_task();
        let day = date(2026, 3, 10);

        let updated = toggle_completion(&plant, &TaskId::Watering { slot: 0 }, day);
        assert_eq!(updated.tasks[0].last_done, date(2026, 3, 1));
    }

    #[test]
    fn test_toggles_on_different_dates_are_independent() {
        let plant = plant_with_care_task();
        let task = TaskId::Watering { slot: 0 };

        let updated = toggle_completion(&plant, &task, date(2026, 3, 5));
        assert!(updated.is_completed(date(2026, 3, 5), &task));
        assert!(!updated.is_completed(date(2026, 3, 6), &task));
    }
}
