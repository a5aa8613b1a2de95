//! Import/export, tips, and data wipe operations for the PlantStore.

use std::collections::BTreeMap;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::PlantStore;
use crate::{
    error::{Result, TrackerError},
    models::TrackedPlant,
    params::Id,
    tips::{build_tip_prompt, TipGenerator},
};

/// The full user-owned dataset: both logical storage keys.
///
/// Import applies each section verbatim when present and leaves the
/// stored key alone when absent; there is no schema validation and no
/// merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Ordered list of tracked plant records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracked_plants: Option<Vec<TrackedPlant>>,

    /// Plant ID → markdown tip text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_tips: Option<BTreeMap<u64, String>>,
}

impl PlantStore {
    /// Exports both logical keys as one document.
    pub async fn export_data(&self) -> Result<UserData> {
        self.run_blocking(|db| {
            Ok(UserData {
                tracked_plants: Some(db.load_plants()?),
                growth_tips: Some(db.load_tips()?),
            })
        })
        .await
    }

    /// Imports a previously exported document, overwriting each
    /// present section verbatim. A destructive replace: existing data
    /// under an imported key is lost.
    pub async fn import_data(&self, data: UserData) -> Result<()> {
        self.run_blocking(move |db| {
            if let Some(plants) = &data.tracked_plants {
                db.save_plants(plants)?;
            }
            if let Some(tips) = &data.growth_tips {
                db.save_tips(tips)?;
            }
            Ok(())
        })
        .await
    }

    /// Wipes all tracked plants and stored tips.
    ///
    /// Requires explicit confirmation, mirroring plant removal.
    pub async fn clear_all(&self, confirmed: bool) -> Result<()> {
        if !confirmed {
            return Err(TrackerError::invalid_input(
                "confirmed",
                "Clearing all data requires explicit confirmation. \
                 Set 'confirmed' to true to proceed.",
            ));
        }
        self.run_blocking(|db| db.clear_all()).await
    }

    /// Returns the stored care tip for a plant, if one exists.
    pub async fn tip(&self, params: &Id) -> Result<Option<String>> {
        let plant_id = params.id;
        self.run_blocking(move |db| {
            let tips = db.load_tips()?;
            Ok(tips.get(&plant_id).cloned())
        })
        .await
    }

    /// Regenerates the care tip for a plant through the external
    /// generator and stores the result.
    ///
    /// Called only on explicit user request. Generation failure is
    /// isolated to the requesting plant: it is logged, the previous
    /// tip value is left unchanged, and `Ok(None)` is returned.
    /// Persistence failure still fails the operation.
    pub async fn refresh_tip(
        &self,
        params: &Id,
        generator: &dyn TipGenerator,
    ) -> Result<Option<String>> {
        let plant = self
            .get_plant(params)
            .await?
            .ok_or(TrackerError::PlantNotFound { id: params.id })?;
        let plan = self
            .catalog
            .get(plant.plan_id)
            .ok_or(TrackerError::PlanNotFound { id: plant.plan_id })?;

        let prompt = build_tip_prompt(&plant, plan);
        match generator.generate(&prompt).await {
            Ok(tip) => {
                let plant_id = plant.id;
                let stored = tip.clone();
                self.run_blocking(move |db| {
                    let mut tips = db.load_tips()?;
                    tips.insert(plant_id, stored);
                    db.save_tips(&tips)
                })
                .await?;
                info!("Refreshed care tip for plant {}", plant.id);
                Ok(Some(tip))
            }
            Err(e) => {
                warn!("Tip generation failed for plant {}: {e}", plant.id);
                Ok(None)
            }
        }
    }
}
