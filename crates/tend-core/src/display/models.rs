//! Display implementations for domain models.
//!
//! Display trait implementations for the core models live here,
//! separated from the model definitions. All output is markdown so it
//! renders well both in a plain pipe and through the terminal skin.

use std::fmt;

use super::datetime::{ClockHour, ShortDate};
use crate::models::{ChecklistItem, ChecklistTask, GrowthPlan, PlantSummary, TrackedPlant};

impl fmt::Display for PlantSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {} (ID: {}) [{}%]",
            self.image, self.name, self.id, self.progress
        )?;
        writeln!(f)?;

        writeln!(f, "- **Variety**: {}", self.variety)?;
        writeln!(f, "- **Weight**: {} kg", self.weight_kg)?;
        writeln!(f, "- **Started**: {}", ShortDate(self.start_date))?;
        if let Some(stage) = &self.stage_name {
            writeln!(f, "- **Stage**: {stage}")?;
        }
        if let Some(days) = self.days_remaining {
            if days > 0 {
                writeln!(f, "- **Days to harvest**: {days}")?;
            } else {
                writeln!(f, "- **Harvest**: ready")?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for TrackedPlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} {} (ID: {})", self.image, self.name, self.id)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Variety: {}", self.variety)?;
        writeln!(f, "- Weight: {} kg", self.weight_kg)?;
        writeln!(f, "- Started: {}", ShortDate(self.start_date))?;
        writeln!(f, "- Progress: {}%", self.progress)?;

        if !self.water_schedule.is_empty() {
            writeln!(f, "\n## Watering Schedule")?;
            writeln!(f)?;
            for entry in &self.water_schedule {
                writeln!(f, "- {}: {} ml", ClockHour(entry.hour), entry.amount_ml)?;
            }
        }

        if !self.tasks.is_empty() {
            writeln!(f, "\n## Care Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "- {} ({})", task.name, task.frequency)?;
                if let Some(due) = task.next_due {
                    writeln!(f, ", next due {}", ShortDate(due))?;
                } else {
                    writeln!(f, ", last done {}", ShortDate(task.last_done))?;
                }
            }
        }

        if !self.notes.is_empty() {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        Ok(())
    }
}

impl fmt::Display for GrowthPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {}, {} (ID: {})",
            self.image, self.name, self.variety, self.id
        )?;
        writeln!(f)?;

        writeln!(f, "- **Difficulty**: {}", self.difficulty)?;
        writeln!(f, "- **Harvest**: {}", self.harvest_time)?;
        writeln!(f, "- **Suggested weight**: {} kg", self.default_weight_kg)?;
        writeln!(f)?;

        writeln!(f, "### Stages")?;
        writeln!(f)?;
        for (index, stage) in self.stages.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({}): {}",
                index + 1,
                stage.name,
                stage.duration,
                stage.care
            )?;
        }
        writeln!(f)?;

        writeln!(f, "### Watering")?;
        writeln!(f)?;
        for timing in &self.water {
            writeln!(f, "- {}: {} ml/kg", ClockHour(timing.hour), timing.ml_per_kg)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.completed { "x" } else { " " };
        match &self.task {
            ChecklistTask::Watering { hour, amount_ml, .. } => {
                write!(
                    f,
                    "- [{marker}] Water at {}, {} ml ({})",
                    ClockHour(*hour),
                    amount_ml,
                    self.id()
                )?;
            }
            ChecklistTask::Inspection { days_since_start } => {
                write!(
                    f,
                    "- [{marker}] Check for disease signs, day {} ({})",
                    days_since_start,
                    self.id()
                )?;
            }
            ChecklistTask::Care {
                name, frequency, ..
            } => {
                write!(f, "- [{marker}] {name}, {frequency} ({})", self.id())?;
            }
        }
        if self.due_now && !self.completed {
            write!(f, " **due now**")?;
        }
        writeln!(f)
    }
}

/// Full plant detail view with the growth plan resolved, showing the
/// stage journey and reference links the plant record alone cannot.
pub struct PlantDetail<'a> {
    pub plant: &'a TrackedPlant,
    pub plan: Option<&'a GrowthPlan>,
}

impl<'a> PlantDetail<'a> {
    pub fn new(plant: &'a TrackedPlant, plan: Option<&'a GrowthPlan>) -> Self {
        Self { plant, plan }
    }
}

impl fmt::Display for PlantDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plant = self.plant;
        writeln!(f, "# {} {} (ID: {})", plant.image, plant.name, plant.id)?;
        writeln!(f)?;

        writeln!(f, "- Variety: {}", plant.variety)?;
        writeln!(f, "- Weight: {} kg", plant.weight_kg)?;
        writeln!(f, "- Started: {}", ShortDate(plant.start_date))?;
        if let Some(stage) = self
            .plan
            .and_then(|plan| plan.stages.get(plant.current_stage))
        {
            writeln!(f, "- Progress: {}% ({})", plant.progress, stage.name)?;
        } else {
            writeln!(f, "- Progress: {}%", plant.progress)?;
        }

        if let Some(plan) = self.plan {
            writeln!(f, "\n## Growth Journey")?;
            writeln!(f)?;
            for (index, stage) in plan.stages.iter().enumerate() {
                let marker = if index < plant.current_stage { "x" } else { " " };
                write!(f, "- [{marker}] {} ({})", stage.name, stage.duration)?;
                if index == plant.current_stage {
                    write!(f, " *current*: {}", stage.care)?;
                }
                writeln!(f)?;
            }
        }

        if !plant.water_schedule.is_empty() {
            writeln!(f, "\n## Watering Schedule")?;
            writeln!(f)?;
            for entry in &plant.water_schedule {
                writeln!(f, "- {}: {} ml", ClockHour(entry.hour), entry.amount_ml)?;
            }
        }

        if !plant.tasks.is_empty() {
            writeln!(f, "\n## Care Tasks")?;
            writeln!(f)?;
            for task in &plant.tasks {
                write!(f, "- {} ({})", task.name, task.frequency)?;
                if let Some(due) = task.next_due {
                    writeln!(f, ", next due {}", ShortDate(due))?;
                } else {
                    writeln!(f, ", last done {}", ShortDate(task.last_done))?;
                }
            }
        }

        if let Some(plan) = self.plan.filter(|p| !p.references.is_empty()) {
            writeln!(f, "\n## References")?;
            for label in ["guide", "disease", "maintenance", "other"] {
                let group: Vec<_> = plan
                    .references
                    .iter()
                    .filter(|r| {
                        let category = r.category.as_deref().unwrap_or("other");
                        if label == "other" {
                            !matches!(category, "guide" | "disease" | "maintenance")
                        } else {
                            category == label
                        }
                    })
                    .collect();
                if group.is_empty() {
                    continue;
                }
                writeln!(f)?;
                writeln!(f, "### {}", category_heading(label))?;
                writeln!(f)?;
                for reference in group {
                    writeln!(f, "- [{}]({})", reference.title, reference.url)?;
                }
            }
        }

        if !plant.notes.is_empty() {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", plant.notes)?;
        }

        Ok(())
    }
}

fn category_heading(category: &str) -> &'static str {
    match category {
        "guide" => "Growing Guides",
        "disease" => "Disease Information",
        "maintenance" => "Maintenance Tips",
        _ => "Other Resources",
    }
}
