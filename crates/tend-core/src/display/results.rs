//! Result wrapper types for displaying operation outcomes.
//!
//! Wrappers that format the results of create, update, delete, and
//! toggle operations with consistent messaging.

use std::fmt;

use jiff::civil::Date;

use super::datetime::ShortDate;
use crate::models::{TaskId, TrackedPlant};

/// Wrapper type for displaying the result of create operations.
///
/// Formats a success line with the new resource ID followed by the
/// full resource details.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<TrackedPlant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Started tracking plant with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations,
/// optionally listing the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<TrackedPlant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plant with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<TrackedPlant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed plant '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

/// Result of flipping a checklist task's completion flag.
pub struct ToggleResult {
    pub plant_id: u64,
    pub task: TaskId,
    pub date: Date,
    pub completed: bool,
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Marked task '{}' as {} for {} (plant {})",
            self.task,
            if self.completed { "done" } else { "not done" },
            ShortDate(self.date),
            self.plant_id
        )
    }
}
