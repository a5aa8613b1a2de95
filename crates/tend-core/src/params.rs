//! Parameter structures for tracker operations.
//!
//! These structures are shared across interfaces (CLI today, anything
//! else tomorrow) without framework-specific derives. Interface layers
//! wrap them with their own derives and convert via `From`.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::TaskId;

/// Generic parameters for operations requiring just a plant ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the tracked plant to operate on
    pub id: u64,
}

/// Parameters for starting to track a new plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlant {
    /// ID of the growth plan in the catalog
    pub plan_id: u64,
    /// Plant weight in kilograms; must be positive
    pub weight_kg: f64,
    /// Calendar date tracking starts; defaults to today
    pub start_date: Option<Date>,
}

impl AddPlant {
    /// Validates the parameters that can be checked without the
    /// catalog. Plan resolution is checked by the store.
    pub fn validate(&self) -> Result<()> {
        if !(self.weight_kg > 0.0) {
            return Err(TrackerError::invalid_input(
                "weight_kg",
                format!(
                    "Plant weight must be greater than 0, got {}",
                    self.weight_kg
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters for permanently removing a tracked plant.
///
/// Requires explicit confirmation to prevent accidental deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovePlant {
    /// ID of the plant to remove
    pub id: u64,
    /// Must be true for the removal to proceed
    pub confirmed: bool,
}

/// Parameters for toggling a checklist task's completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTask {
    /// ID of the tracked plant
    pub plant_id: u64,
    /// The task to toggle
    pub task: TaskId,
    /// Date of the completion record; defaults to today
    pub date: Option<Date>,
}

/// Parameters for replacing a plant's free-text notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetNotes {
    /// ID of the tracked plant
    pub id: u64,
    /// New notes text, replacing the previous value
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    #[test]
    fn test_add_plant_validate_positive_weight() {
        let params = AddPlant {
            plan_id: 1,
            weight_kg: 2.0,
            start_date: None,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_add_plant_validate_zero_weight() {
        let params = AddPlant {
            plan_id: 1,
            weight_kg: 0.0,
            start_date: None,
        };
        match params.validate().unwrap_err() {
            TrackerError::InvalidInput { field, .. } => assert_eq!(field, "weight_kg"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_add_plant_validate_negative_weight() {
        let params = AddPlant {
            plan_id: 1,
            weight_kg: -1.5,
            start_date: None,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_add_plant_validate_nan_weight() {
        let params = AddPlant {
            plan_id: 1,
            weight_kg: f64::NAN,
            start_date: None,
        };
        assert!(params.validate().is_err());
    }
}
