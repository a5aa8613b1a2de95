//! Tracked plant model definition and related functionality.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::task::TaskId;

/// Per-day completion state: calendar date → task ID → done flag.
pub type CompletionMap = BTreeMap<Date, BTreeMap<TaskId, bool>>;

/// A user-defined repeatable care action, always present in the daily
/// checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTask {
    /// Identifier unique within the owning plant
    pub id: u64,

    /// Task name shown in the checklist
    pub name: String,

    /// Frequency label (e.g. "As needed", "Every 15 days")
    pub frequency: String,

    /// Date the task was last marked done
    pub last_done: Date,

    /// Optional next due date, set for periodic reminders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<Date>,
}

/// One entry of a plant's resolved watering schedule. The absolute
/// amount is computed once at creation from the plan template and the
/// plant's weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterScheduleEntry {
    /// Hour of the day (0-23)
    pub hour: i8,

    /// Template amount per kilogram, kept for future recalculations
    pub ml_per_kg: f64,

    /// Absolute amount in milliliters: round(ml_per_kg × weight_kg)
    pub amount_ml: u32,
}

/// A user's instance of cultivating one plant.
///
/// Owned by the plant store. The derived fields (`current_stage`,
/// `progress`) are recomputed by the progress calculator and never
/// hand-edited; everything except notes, tasks, completions, and the
/// derived fields is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedPlant {
    /// Unique identifier, assigned at creation
    pub id: u64,

    /// Reference into the growth plan catalog
    pub plan_id: u64,

    /// Species name, denormalized from the plan at creation
    pub name: String,

    /// Variety name, denormalized from the plan at creation
    pub variety: String,

    /// Display emoji, denormalized from the plan at creation
    pub image: String,

    /// Plant weight in kilograms; always positive
    pub weight_kg: f64,

    /// Calendar date tracking started
    pub start_date: Date,

    /// Derived: index into the plan's stages (0-based)
    pub current_stage: usize,

    /// Derived: growth completion percentage, clamped to [0, 100]
    pub progress: u8,

    /// Free-text notes, user-owned
    #[serde(default)]
    pub notes: String,

    /// User-visible recurring care tasks
    #[serde(default)]
    pub tasks: Vec<RecurringTask>,

    /// Watering schedule resolved from the plan template and weight
    pub water_schedule: Vec<WaterScheduleEntry>,

    /// Per-day, per-task completion booleans
    #[serde(default)]
    pub task_completions: CompletionMap,
}

impl TrackedPlant {
    /// Reads the completion flag for a task on a given date,
    /// defaulting to false when no record exists.
    pub fn is_completed(&self, date: Date, task: &TaskId) -> bool {
        self.task_completions
            .get(&date)
            .and_then(|day| day.get(task))
            .copied()
            .unwrap_or(false)
    }
}
