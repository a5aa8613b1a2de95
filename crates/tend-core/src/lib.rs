//! Core library for the Tend plant cultivation tracker.
//!
//! This crate provides the engine for tracking plants against growth
//! plans: progress calculation, daily care scheduling, per-day task
//! completion, and key-value persistence of the user's data.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting
//! output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`]
//!   for direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and
//!   specialized formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's
//!   terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use tend_core::{params::AddPlant, PlantStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a store instance over the built-in catalog
//! let store = PlantStoreBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Start tracking a tomato plant
//! let params = AddPlant {
//!     plan_id: 1,
//!     weight_kg: 2.0,
//!     start_date: None,
//! };
//! let plant = store.add_plant(&params).await?;
//! println!("Tracking: {}", plant);
//!
//! // List tracked plants as summaries
//! let today = jiff::Zoned::now().date();
//! for plant in &store.list_plants_summary(today).await? {
//!     println!("Plant: {}", plant.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod completion;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod progress;
pub mod schedule;
pub mod store;
pub mod tips;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CatalogPlans, Checklist, CreateResult, DeleteResult, OperationStatus, PlantDetail,
    PlantSummaries, ToggleResult, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    ChecklistItem, ChecklistTask, GrowthPlan, GrowthPlanCatalog, GrowthStage, PlantSummary,
    RecurringTask, TaskId, TrackedPlant, WaterScheduleEntry,
};
pub use params::{AddPlant, Id, RemovePlant, SetNotes, ToggleTask};
pub use store::{PlantStore, PlantStoreBuilder, UserData};
pub use tips::{build_tip_prompt, TipGenerator};
