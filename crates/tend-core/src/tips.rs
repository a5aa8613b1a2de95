//! Stage-specific care tip generation seam.
//!
//! Tip text comes from an external service; the engine only builds the
//! prompt, stores the result keyed by plant ID, and isolates failures
//! to the requesting plant. Refreshes happen only on explicit request,
//! never automatically.

use async_trait::async_trait;

use crate::models::{GrowthPlan, TrackedPlant};

/// External collaborator that turns a prompt into markdown tip text.
#[async_trait]
pub trait TipGenerator: Send + Sync {
    /// Generates care tip markdown for the given prompt.
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Builds the care-tip prompt for a plant in its current growth stage.
pub fn build_tip_prompt(plant: &TrackedPlant, plan: &GrowthPlan) -> String {
    let stage_name = plan
        .stages
        .get(plant.current_stage)
        .map(|s| s.name.as_str())
        .unwrap_or("final");

    format!(
        "You are an expert gardener. Generate specific care tips for {name} ({variety}) \
that is currently in the {stage} stage of growth.

Focus on:
1. Watering needs at this specific growth stage
2. Light requirements
3. Nutrient/fertilization recommendations
4. Common issues to watch for at this stage and how to prevent them
5. Any special care techniques appropriate for this stage

Format your response in markdown with clear headings and bullet points.
Be specific to this plant variety and growth stage. Keep your response concise but comprehensive.",
        name = plant.name,
        variety = plant.variety,
        stage = stage_name,
    )
}
