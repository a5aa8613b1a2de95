//! Data models for growth plans and tracked plants.
//!
//! This module contains the core domain models of the tracking engine.
//! Display implementations live in [`crate::display::models`] to keep
//! data structures separate from presentation logic.
//!
//! Two families of types exist:
//!
//! 1. **Reference data** ([`GrowthPlan`], [`GrowthPlanCatalog`]):
//!    immutable templates supplied whole by the catalog, never mutated
//!    by the engine.
//! 2. **Tracked state** ([`TrackedPlant`] and friends): the mutable
//!    records owned by the plant store, with derived progress fields
//!    recomputed by the progress calculator.
//!
//! Task identity ([`TaskId`]) is a tagged variant whose canonical
//! string form (`water-<slot>`, `disease-detection`, `task-<id>`) is
//! what the persisted completion maps are keyed by.

pub mod catalog;
pub mod plan;
pub mod plant;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use catalog::GrowthPlanCatalog;
pub use plan::{GrowthPlan, GrowthStage, Reference, WaterTiming};
pub use plant::{CompletionMap, RecurringTask, TrackedPlant, WaterScheduleEntry};
pub use summary::PlantSummary;
pub use task::{ChecklistItem, ChecklistTask, TaskId};
