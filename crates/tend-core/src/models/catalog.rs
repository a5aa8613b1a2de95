//! Read-only catalog of growth plans.
//!
//! The catalog is externally supplied reference data. The engine looks
//! plans up by ID and never mutates them. A built-in catalog covering
//! five common species is provided; deployments can load their own
//! from a JSON file instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::plan::{GrowthPlan, GrowthStage, Reference, WaterTiming};
use crate::error::{Result, TrackerError};

/// Immutable collection of growth plans, addressed by plan ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthPlanCatalog {
    plans: Vec<GrowthPlan>,
}

impl GrowthPlanCatalog {
    /// Creates a catalog from an already-loaded list of plans.
    pub fn new(plans: Vec<GrowthPlan>) -> Self {
        Self { plans }
    }

    /// Loads a catalog from a JSON file containing an array of plans.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(&path).map_err(|e| TrackerError::FileSystem {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        let plans: Vec<GrowthPlan> = serde_json::from_str(&data)?;
        Ok(Self { plans })
    }

    /// Looks up a plan by its ID.
    pub fn get(&self, id: u64) -> Option<&GrowthPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Returns all plans in catalog order.
    pub fn plans(&self) -> &[GrowthPlan] {
        &self.plans
    }

    /// Returns the built-in catalog of five common garden plants.
    pub fn builtin() -> Self {
        Self::new(vec![
            GrowthPlan {
                id: 1,
                name: "Tomato".to_string(),
                variety: "Roma".to_string(),
                image: "🍅".to_string(),
                difficulty: "Medium".to_string(),
                harvest_time: "80-90 days".to_string(),
                default_weight_kg: 2.0,
                water: vec![timing(6, 300.0), timing(17, 200.0)],
                references: vec![
                    reference(
                        "Tomato Growing Guide",
                        "https://www.rhs.org.uk/vegetables/tomatoes/grow-your-own",
                        Some("guide"),
                    ),
                    reference(
                        "Common Tomato Diseases",
                        "https://www.gardeningknowhow.com/edible/vegetables/tomato/tomato-diseases.htm",
                        Some("disease"),
                    ),
                    reference(
                        "Pruning Techniques",
                        "https://www.thespruce.com/how-to-prune-tomatoes-848197",
                        Some("maintenance"),
                    ),
                ],
                stages: vec![
                    stage("Seed", "7-14 days", "Keep soil moist, 70-80°F"),
                    stage("Seedling", "15-30 days", "Provide 6-8 hours of light"),
                    stage("Vegetative", "30-50 days", "Regular watering, support stems"),
                    stage("Flowering", "50-70 days", "Reduce nitrogen, increase potassium"),
                    stage("Fruiting", "70-90 days", "Consistent water, watch for pests"),
                ],
            },
            GrowthPlan {
                id: 2,
                name: "Basil".to_string(),
                variety: "Sweet Basil".to_string(),
                image: "🌿".to_string(),
                difficulty: "Easy".to_string(),
                harvest_time: "50-60 days".to_string(),
                default_weight_kg: 0.5,
                water: vec![timing(7, 150.0), timing(18, 150.0)],
                references: vec![
                    reference("Basil Care Guide", "https://www.almanac.com/plant/basil", None),
                    reference(
                        "Harvesting Basil",
                        "https://www.gardenersworld.com/how-to/grow-plants/how-to-harvest-basil/",
                        None,
                    ),
                    reference(
                        "Preventing Bolting",
                        "https://savvygardening.com/how-to-prevent-basil-from-flowering/",
                        None,
                    ),
                ],
                stages: vec![
                    stage("Seed", "5-10 days", "Warm soil, light covering"),
                    stage("Seedling", "10-20 days", "Bright indirect light"),
                    stage("Vegetative", "20-40 days", "Regular pruning, moderate water"),
                    stage("Mature", "40-60 days", "Harvest outer leaves regularly"),
                ],
            },
            GrowthPlan {
                id: 3,
                name: "Pepper".to_string(),
                variety: "Bell Pepper".to_string(),
                image: "🫑".to_string(),
                difficulty: "Medium".to_string(),
                harvest_time: "90-100 days".to_string(),
                default_weight_kg: 1.5,
                water: vec![timing(6, 450.0)],
                references: vec![
                    reference(
                        "Bell Pepper Growing Guide",
                        "https://www.almanac.com/plant/bell-peppers",
                        None,
                    ),
                    reference(
                        "Pepper Plant Problems",
                        "https://www.thespruce.com/pepper-growing-problems-1403414",
                        None,
                    ),
                    reference(
                        "When to Harvest Peppers",
                        "https://harvesttotable.com/how_to_harvest_and_store_pep/",
                        None,
                    ),
                ],
                stages: vec![
                    stage("Seed", "7-14 days", "Warm soil (80-90°F)"),
                    stage("Seedling", "14-35 days", "Bright light, avoid overwatering"),
                    stage("Vegetative", "35-60 days", "Support stems, consistent watering"),
                    stage("Flowering", "60-80 days", "Avoid high nitrogen fertilizers"),
                    stage("Fruiting", "80-100 days", "Consistent moisture, calcium supplement"),
                ],
            },
            GrowthPlan {
                id: 4,
                name: "Lettuce".to_string(),
                variety: "Butterhead".to_string(),
                image: "🥬".to_string(),
                difficulty: "Easy".to_string(),
                harvest_time: "45-55 days".to_string(),
                default_weight_kg: 0.8,
                water: vec![timing(6, 150.0), timing(17, 100.0)],
                references: vec![
                    reference("Growing Lettuce", "https://www.almanac.com/plant/lettuce", None),
                    reference(
                        "Succession Planting",
                        "https://www.growveg.com/guides/succession-sowing-of-lettuce/",
                        None,
                    ),
                    reference(
                        "Preventing Bolting",
                        "https://www.gardeningknowhow.com/edible/vegetables/lettuce/bolting-lettuce-plants.htm",
                        None,
                    ),
                ],
                stages: vec![
                    stage("Seed", "2-8 days", "Shallow planting, light soil"),
                    stage("Seedling", "8-20 days", "Keep soil moist, moderate light"),
                    stage("Leaf development", "20-40 days", "Regular light watering"),
                    stage(
                        "Head formation",
                        "40-55 days",
                        "Protect from heat, harvest before bolting",
                    ),
                ],
            },
            GrowthPlan {
                id: 5,
                name: "Cucumber".to_string(),
                variety: "English".to_string(),
                image: "🥒".to_string(),
                difficulty: "Medium".to_string(),
                harvest_time: "55-65 days".to_string(),
                default_weight_kg: 1.2,
                water: vec![timing(6, 250.0), timing(12, 150.0), timing(18, 200.0)],
                references: vec![
                    reference(
                        "Cucumber Growing Guide",
                        "https://www.almanac.com/plant/cucumbers",
                        None,
                    ),
                    reference(
                        "Trellising Cucumbers",
                        "https://savvygardening.com/cucumber-trellis-ideas/",
                        None,
                    ),
                    reference(
                        "Common Cucumber Problems",
                        "https://www.thespruce.com/cucumber-growing-problems-1403491",
                        None,
                    ),
                ],
                stages: vec![
                    stage("Seed", "3-10 days", "Warm soil, adequate moisture"),
                    stage("Seedling", "10-20 days", "Full sun, regular watering"),
                    stage("Vegetative", "20-35 days", "Trellising, consistent water"),
                    stage("Flowering", "35-45 days", "Avoid wetting foliage, bee friendly"),
                    stage("Fruiting", "45-65 days", "Even moisture, harvest frequently"),
                ],
            },
        ])
    }
}

impl Default for GrowthPlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn stage(name: &str, duration: &str, care: &str) -> GrowthStage {
    GrowthStage {
        name: name.to_string(),
        duration: duration.to_string(),
        care: care.to_string(),
    }
}

fn timing(hour: i8, ml_per_kg: f64) -> WaterTiming {
    WaterTiming { hour, ml_per_kg }
}

fn reference(title: &str, url: &str, category: Option<&str>) -> Reference {
    Reference {
        title: title.to_string(),
        url: url.to_string(),
        category: category.map(String::from),
    }
}
