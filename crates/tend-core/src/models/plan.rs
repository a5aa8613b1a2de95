//! Growth plan model definitions.
//!
//! Growth plans are immutable reference data supplied whole by the
//! catalog. The engine reads them to resolve watering schedules and
//! growth durations but never mutates them.

use serde::{Deserialize, Serialize};

/// A single ordered phase of growth with associated care guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStage {
    /// Name of the stage (e.g. "Seedling")
    pub name: String,

    /// Expected duration as a free-text range (e.g. "15-30 days")
    pub duration: String,

    /// Care guidance for this stage
    pub care: String,
}

/// One entry of a plan's watering template: an hour of day and a
/// per-kilogram amount to be scaled by the plant's weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterTiming {
    /// Hour of the day (0-23) the watering is scheduled for
    pub hour: i8,

    /// Milliliters of water per kilogram of plant weight
    pub ml_per_kg: f64,
}

/// An external reference link associated with a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Human-readable title of the resource
    pub title: String,

    /// Link to the resource
    pub url: String,

    /// Optional grouping category (e.g. "guide", "disease",
    /// "maintenance"); ungrouped references display under "other"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Immutable per-species growth template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Common name of the species (e.g. "Tomato")
    pub name: String,

    /// Variety name (e.g. "Roma")
    pub variety: String,

    /// Emoji used when displaying the plant
    pub image: String,

    /// Cultivation difficulty label
    pub difficulty: String,

    /// Expected time to harvest as a free-text range (e.g. "80-90 days")
    pub harvest_time: String,

    /// Suggested plant weight in kilograms
    pub default_weight_kg: f64,

    /// Watering template, scaled by plant weight at tracking time
    pub water: Vec<WaterTiming>,

    /// Reference links grouped by category for display
    #[serde(default)]
    pub references: Vec<Reference>,

    /// Ordered growth stages
    pub stages: Vec<GrowthStage>,
}
