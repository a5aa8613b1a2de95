//! Plant lifecycle operations for the PlantStore.

use jiff::civil::{Date, DateTime};
use jiff::{ToSpan, Zoned};
use log::warn;

use super::PlantStore;
use crate::{
    completion,
    display::{Checklist, PlantSummaries},
    error::{Result, TrackerError},
    models::{PlantSummary, RecurringTask, TrackedPlant, WaterScheduleEntry},
    params::{AddPlant, Id, RemovePlant, SetNotes, ToggleTask},
    progress, schedule,
};

impl PlantStore {
    /// Starts tracking a new plant.
    ///
    /// Validates the weight and plan reference before any state
    /// mutation, resolves the watering schedule from the plan template
    /// and the plant's weight, seeds the default recurring tasks, and
    /// derives the initial progress fields at the start date (0% and
    /// stage 0 for a same-day start).
    pub async fn add_plant(&self, params: &AddPlant) -> Result<TrackedPlant> {
        params.validate()?;
        let plan = self
            .catalog
            .get(params.plan_id)
            .ok_or(TrackerError::PlanNotFound { id: params.plan_id })?
            .clone();

        let start_date = params
            .start_date
            .unwrap_or_else(|| Zoned::now().date());

        let water_schedule: Vec<WaterScheduleEntry> = plan
            .water
            .iter()
            .map(|timing| WaterScheduleEntry {
                hour: timing.hour,
                ml_per_kg: timing.ml_per_kg,
                amount_ml: (timing.ml_per_kg * params.weight_kg).round() as u32,
            })
            .collect();

        let tasks = vec![
            RecurringTask {
                id: 1,
                name: "Water regularly".to_string(),
                frequency: "As needed".to_string(),
                last_done: start_date,
                next_due: None,
            },
            RecurringTask {
                id: 2,
                name: "Check for disease signs".to_string(),
                frequency: "Every 15 days".to_string(),
                last_done: start_date,
                next_due: Some(
                    start_date.saturating_add(schedule::INSPECTION_INTERVAL_DAYS.days()),
                ),
            },
        ];

        let mut plant = TrackedPlant {
            id: 0, // assigned below, once the collection is loaded
            plan_id: plan.id,
            name: plan.name.clone(),
            variety: plan.variety.clone(),
            image: plan.image.clone(),
            weight_kg: params.weight_kg,
            start_date,
            current_stage: 0,
            progress: 0,
            notes: String::new(),
            tasks,
            water_schedule,
            task_completions: Default::default(),
        };

        let derived = progress::compute_progress(&plant, &plan, start_date);
        plant.progress = derived.percent;
        plant.current_stage = derived.stage;

        self.run_blocking(move |db| {
            let mut plants = db.load_plants()?;
            plant.id = plants.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            plants.push(plant.clone());
            db.save_plants(&plants)?;
            Ok(plant)
        })
        .await
    }

    /// Retrieves a tracked plant by its ID.
    pub async fn get_plant(&self, params: &Id) -> Result<Option<TrackedPlant>> {
        let plant_id = params.id;
        self.run_blocking(move |db| {
            let plants = db.load_plants()?;
            Ok(plants.into_iter().find(|p| p.id == plant_id))
        })
        .await
    }

    /// Lists all tracked plants in insertion order.
    pub async fn list_plants(&self) -> Result<Vec<TrackedPlant>> {
        self.run_blocking(|db| db.load_plants()).await
    }

    /// Lists tracked plants as summaries for display, with stage names
    /// and remaining days resolved against the catalog.
    pub async fn list_plants_summary(&self, as_of: Date) -> Result<PlantSummaries> {
        let plants = self.list_plants().await?;
        let summaries = plants
            .iter()
            .map(|plant| {
                let mut summary = PlantSummary::from(plant);
                if let Some(plan) = self.catalog.get(plant.plan_id) {
                    summary.stage_name = plan
                        .stages
                        .get(plant.current_stage)
                        .map(|s| s.name.clone());
                    summary.days_remaining = progress::days_remaining(plant, plan, as_of);
                }
                summary
            })
            .collect();
        Ok(PlantSummaries(summaries))
    }

    /// Permanently removes a tracked plant.
    ///
    /// Requires explicit confirmation. Returns the removed plant for
    /// confirmation display, or None when no plant has the given ID.
    /// Any reference the caller holds to the plant as "selected" must
    /// be cleared by the caller; the store keeps no secondary pointer.
    pub async fn remove_plant(&self, params: &RemovePlant) -> Result<Option<TrackedPlant>> {
        if !params.confirmed {
            return Err(TrackerError::invalid_input(
                "confirmed",
                "Plant removal requires explicit confirmation. \
                 Set 'confirmed' to true to proceed with permanent removal.",
            ));
        }

        let plant_id = params.id;
        self.run_blocking(move |db| {
            let mut plants = db.load_plants()?;
            let position = plants.iter().position(|p| p.id == plant_id);
            let Some(position) = position else {
                return Ok(None);
            };
            let removed = plants.remove(position);
            db.save_plants(&plants)?;
            Ok(Some(removed))
        })
        .await
    }

    /// Re-derives progress and stage for every tracked plant at the
    /// given date, replacing only the derived fields.
    ///
    /// Idempotent and safe on an empty collection; also safe to call
    /// repeatedly from a periodic tick. A plant whose plan no longer
    /// resolves in the catalog is left untouched and logged.
    pub async fn recalculate_all(&self, as_of: Date) -> Result<usize> {
        let catalog = self.catalog.clone();
        self.run_blocking(move |db| {
            let mut plants = db.load_plants()?;
            let mut touched = 0;
            for plant in &mut plants {
                let Some(plan) = catalog.get(plant.plan_id) else {
                    warn!(
                        "Skipping progress for plant {}: plan {} not in catalog",
                        plant.id, plant.plan_id
                    );
                    continue;
                };
                let derived = progress::compute_progress(plant, plan, as_of);
                plant.progress = derived.percent;
                plant.current_stage = derived.stage;
                touched += 1;
            }
            db.save_plants(&plants)?;
            Ok(touched)
        })
        .await
    }

    /// Builds the daily care checklist for a plant at the given
    /// instant.
    pub async fn checklist(&self, params: &Id, as_of: DateTime) -> Result<Checklist> {
        let plant = self
            .get_plant(params)
            .await?
            .ok_or(TrackerError::PlantNotFound { id: params.id })?;
        let items = schedule::daily_checklist(&plant, as_of);
        Ok(Checklist {
            plant_id: plant.id,
            plant_name: plant.name,
            date: as_of.date(),
            items,
        })
    }

    /// Toggles a task's completion flag for a date (today when not
    /// given) and persists the updated plant record.
    pub async fn toggle_task(&self, params: &ToggleTask) -> Result<TrackedPlant> {
        let date = params.date.unwrap_or_else(|| Zoned::now().date());
        let plant_id = params.plant_id;
        let task = params.task;

        self.run_blocking(move |db| {
            let mut plants = db.load_plants()?;
            let position = plants
                .iter()
                .position(|p| p.id == plant_id)
                .ok_or(TrackerError::PlantNotFound { id: plant_id })?;
            let updated = completion::toggle_completion(&plants[position], &task, date);
            plants[position] = updated.clone();
            db.save_plants(&plants)?;
            Ok(updated)
        })
        .await
    }

    /// Replaces a plant's free-text notes.
    pub async fn set_notes(&self, params: &SetNotes) -> Result<TrackedPlant> {
        let plant_id = params.id;
        let notes = params.notes.clone();

        self.run_blocking(move |db| {
            let mut plants = db.load_plants()?;
            let plant = plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .ok_or(TrackerError::PlantNotFound { id: plant_id })?;
            plant.notes = notes;
            let updated = plant.clone();
            db.save_plants(&plants)?;
            Ok(updated)
        })
        .await
    }
}
