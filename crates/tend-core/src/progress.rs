//! Progress calculation for tracked plants.
//!
//! Pure functions mapping (plant, plan, as-of date) to derived growth
//! state. Re-invoking with the same inputs yields the same output and
//! never touches notes, tasks, or completions.
//!
//! The expected total growth duration comes from the plan's harvest
//! range upper bound ("80-90 days" → 90). When the harvest text has no
//! range, the per-stage duration upper bounds are summed instead, with
//! a single parsed number per stage as the last resort. A duration
//! that resolves to zero or cannot be parsed yields progress 100
//! (treated as already complete) so the scheduler keeps operating.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

use crate::models::{GrowthPlan, TrackedPlant};

static DURATION_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)-(\d+)").expect("valid duration range pattern"));

static DURATION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("valid duration number pattern"));

/// Derived growth state of a plant at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Percentage of the expected growth duration elapsed, in [0, 100]
    pub percent: u8,

    /// Index into the plan's ordered stages
    pub stage: usize,
}

/// Extracts the upper bound of a "lo-hi" range in free text.
fn parse_range_upper(text: &str) -> Option<i64> {
    DURATION_RANGE
        .captures(text)
        .and_then(|caps| caps[2].parse().ok())
}

/// Extracts the first number in free text.
fn parse_single_number(text: &str) -> Option<i64> {
    DURATION_NUMBER
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Resolves the total expected growth duration in days for a plan.
///
/// Returns 0 when neither the harvest range nor any stage duration
/// can be parsed; callers treat that as already complete.
pub fn total_growth_days(plan: &GrowthPlan) -> i64 {
    if let Some(upper) = parse_range_upper(&plan.harvest_time) {
        return upper;
    }
    plan.stages
        .iter()
        .map(|stage| {
            parse_range_upper(&stage.duration)
                .or_else(|| parse_single_number(&stage.duration))
                .unwrap_or(0)
        })
        .sum()
}

/// Whole days elapsed from the start date to the as-of date, clamped
/// at zero for as-of dates before the start.
pub fn elapsed_days(start_date: Date, as_of: Date) -> i64 {
    i64::from((as_of - start_date).get_days()).max(0)
}

/// Computes the progress percentage and current stage index for a
/// plant against its growth plan at the given date.
pub fn compute_progress(plant: &TrackedPlant, plan: &GrowthPlan, as_of: Date) -> Progress {
    let total = total_growth_days(plan);

    let percent = if total <= 0 {
        100
    } else {
        let elapsed = elapsed_days(plant.start_date, as_of);
        let ratio = elapsed as f64 / total as f64;
        (ratio * 100.0).round().min(100.0) as u8
    };

    let stage_count = plan.stages.len();
    let stage = if stage_count == 0 {
        0
    } else {
        let index = (f64::from(percent) / 100.0 * stage_count as f64).floor() as usize;
        index.min(stage_count - 1)
    };

    Progress { percent, stage }
}

/// Days until the expected harvest, clamped at zero.
///
/// Returns None when the plan's harvest range does not parse; the
/// original surface shows this as "Unknown".
pub fn days_remaining(plant: &TrackedPlant, plan: &GrowthPlan, as_of: Date) -> Option<i64> {
    let total = parse_range_upper(&plan.harvest_time)?;
    Some((total - elapsed_days(plant.start_date, as_of)).max(0))
}
