//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with
//! consistent empty-collection handling, keeping presentation out of
//! the models themselves.

use std::{fmt, ops::Index};

use jiff::civil::Date;

use super::datetime::ShortDate;
use crate::models::{ChecklistItem, GrowthPlan, PlantSummary};

/// Newtype wrapper for displaying collections of plant summaries.
///
/// Formats each summary with its own Display implementation and
/// handles the empty collection gracefully. Title handling is left to
/// the consumer.
pub struct PlantSummaries(pub Vec<PlantSummary>);

impl PlantSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlantSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlantSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlantSummaries {
    type Output = PlantSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlantSummaries {
    type Item = PlantSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlantSummaries {
    type Item = &'a PlantSummary;
    type IntoIter = std::slice::Iter<'a, PlantSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlantSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plants tracked.")
        } else {
            for plant in &self.0 {
                write!(f, "{plant}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the growth plan catalog.
pub struct CatalogPlans(pub Vec<GrowthPlan>);

impl CatalogPlans {
    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the catalog.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, GrowthPlan> {
        self.0.iter()
    }
}

impl fmt::Display for CatalogPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No growth plans available.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// A rendered daily checklist for one plant on one date.
pub struct Checklist {
    /// ID of the plant the checklist belongs to
    pub plant_id: u64,

    /// Plant name for the heading
    pub plant_name: String,

    /// Calendar date the checklist was built for
    pub date: Date,

    /// Ordered checklist entries: watering, inspection, care tasks
    pub items: Vec<ChecklistItem>,
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Daily Checklist for {} (ID: {})",
            self.plant_name, self.plant_id
        )?;
        writeln!(f)?;
        writeln!(f, "{}", ShortDate(self.date))?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "Nothing on the checklist for this date.")
        } else {
            for item in &self.items {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}
