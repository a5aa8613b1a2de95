//! Compact plant summary for list views.

use jiff::civil::Date;

use super::plant::TrackedPlant;

/// Condensed view of a tracked plant for list display.
///
/// Carries the derived progress fields plus the current stage name and
/// remaining days, both resolved against the catalog by the store when
/// the summary is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantSummary {
    /// Unique identifier of the tracked plant
    pub id: u64,

    /// Species name
    pub name: String,

    /// Variety name
    pub variety: String,

    /// Display emoji
    pub image: String,

    /// Plant weight in kilograms
    pub weight_kg: f64,

    /// Date tracking started
    pub start_date: Date,

    /// Growth completion percentage
    pub progress: u8,

    /// Name of the current growth stage, when the plan resolves
    pub stage_name: Option<String>,

    /// Days until the expected harvest; None when the plan's harvest
    /// range cannot be parsed
    pub days_remaining: Option<i64>,
}

impl From<&TrackedPlant> for PlantSummary {
    fn from(plant: &TrackedPlant) -> Self {
        Self {
            id: plant.id,
            name: plant.name.clone(),
            variety: plant.variety.clone(),
            image: plant.image.clone(),
            weight_kg: plant.weight_kg,
            start_date: plant.start_date,
            progress: plant.progress,
            stage_name: None,
            days_remaining: None,
        }
    }
}
