//! Task identity and daily checklist item types.
//!
//! Task identity is a tagged variant rather than a raw string, but each
//! variant serializes to a fixed canonical identifier (`water-<slot>`,
//! `disease-detection`, `task-<id>`). Identifiers are a pure function
//! of the variant and its index/id, so they stay stable across
//! recalculations and match the persisted completion maps.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Stable identity of a checklist task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskId {
    /// One slot of the plant's resolved watering schedule (0-indexed)
    Watering { slot: usize },

    /// The periodic disease-detection check
    Inspection,

    /// A user-visible recurring care task, by its task record ID
    Care { task_id: u64 },
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Watering { slot } => write!(f, "water-{slot}"),
            TaskId::Inspection => write!(f, "disease-detection"),
            TaskId::Care { task_id } => write!(f, "task-{task_id}"),
        }
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "disease-detection" {
            return Ok(TaskId::Inspection);
        }
        if let Some(slot) = s.strip_prefix("water-") {
            let slot = slot
                .parse::<usize>()
                .map_err(|_| format!("Invalid watering slot in task ID: {s}"))?;
            return Ok(TaskId::Watering { slot });
        }
        if let Some(task_id) = s.strip_prefix("task-") {
            let task_id = task_id
                .parse::<u64>()
                .map_err(|_| format!("Invalid care task ID: {s}"))?;
            return Ok(TaskId::Care { task_id });
        }
        Err(format!("Invalid task ID: {s}"))
    }
}

// Serialized as the canonical identifier string so the type can key
// the per-day completion maps in the persisted JSON documents.
impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A task on the daily checklist, carrying the fields its kind needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ChecklistTask {
    /// Water the plant at a scheduled hour
    Watering {
        /// Index into the plant's resolved water schedule
        slot: usize,
        /// Scheduled hour of day (0-23)
        hour: i8,
        /// Absolute amount in milliliters, already scaled by weight
        amount_ml: u32,
    },

    /// Periodic disease-detection check, present only on matching days
    Inspection {
        /// Whole days elapsed since the start date
        days_since_start: i64,
    },

    /// User-defined recurring care task, always present
    Care {
        /// ID of the recurring task record
        task_id: u64,
        /// Task name
        name: String,
        /// Frequency label (e.g. "As needed")
        frequency: String,
        /// Date the task was last marked done
        last_done: Date,
    },
}

impl ChecklistTask {
    /// Derives the stable identifier for this task.
    pub fn id(&self) -> TaskId {
        match self {
            ChecklistTask::Watering { slot, .. } => TaskId::Watering { slot: *slot },
            ChecklistTask::Inspection { .. } => TaskId::Inspection,
            ChecklistTask::Care { task_id, .. } => TaskId::Care { task_id: *task_id },
        }
    }
}

/// One rendered entry of the daily checklist.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    /// The task and its typed fields
    pub task: ChecklistTask,

    /// Whether the task is due right now at the as-of instant
    pub due_now: bool,

    /// Completion state for the as-of date
    pub completed: bool,
}

impl ChecklistItem {
    /// The stable identifier of the underlying task.
    pub fn id(&self) -> TaskId {
        self.task.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::Watering { slot: 0 }.to_string(), "water-0");
        assert_eq!(TaskId::Inspection.to_string(), "disease-detection");
        assert_eq!(TaskId::Care { task_id: 2 }.to_string(), "task-2");
    }

    #[test]
    fn test_task_id_from_str() {
        assert_eq!(
            "water-3".parse::<TaskId>().unwrap(),
            TaskId::Watering { slot: 3 }
        );
        assert_eq!(
            "disease-detection".parse::<TaskId>().unwrap(),
            TaskId::Inspection
        );
        assert_eq!(
            "task-42".parse::<TaskId>().unwrap(),
            TaskId::Care { task_id: 42 }
        );
    }

    #[test]
    fn test_task_id_from_str_invalid() {
        assert!("water-x".parse::<TaskId>().is_err());
        assert!("task-".parse::<TaskId>().is_err());
        assert!("prune-1".parse::<TaskId>().is_err());
        assert!("".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_task_id_round_trips_through_display() {
        for id in [
            TaskId::Watering { slot: 7 },
            TaskId::Inspection,
            TaskId::Care { task_id: 9 },
        ] {
            assert_eq!(id.to_string().parse::<TaskId>().unwrap(), id);
        }
    }

    #[test]
    fn test_checklist_task_derives_stable_id() {
        let task = ChecklistTask::Watering {
            slot: 1,
            hour: 17,
            amount_ml: 400,
        };
        assert_eq!(task.id(), TaskId::Watering { slot: 1 });
    }
}
