//! Display formatting functions and result types.
//!
//! Domain models carry their own Display implementations; collections
//! and operation outcomes get newtype wrappers. Everything renders
//! markdown, which the CLI either prints raw or feeds through the
//! terminal skin.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (TrackedPlant,  │───▶│ (collections,   │───▶│    Output       │
//! │  GrowthPlan)    │    │  results)       │    │   (markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (PlantSummaries, CatalogPlans,
//!   Checklist)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, ToggleResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date and clock formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CatalogPlans, Checklist, PlantSummaries};
pub use datetime::{ClockHour, ShortDate};
pub use models::PlantDetail;
pub use results::{CreateResult, DeleteResult, ToggleResult, UpdateResult};
pub use status::OperationStatus;
