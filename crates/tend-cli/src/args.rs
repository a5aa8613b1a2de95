//! Command-line argument definitions using clap's derive API.
//!
//! Each command wraps a framework-free parameter structure from
//! `tend_core::params` and converts into it with `From`, keeping clap
//! concerns out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use tend_core::{
    params::{AddPlant, Id, RemovePlant, SetNotes, ToggleTask},
    TaskId,
};

/// Main command-line interface for the Tend plant tracker
///
/// Tend tracks real plants against per-species growth plans: it
/// derives growth progress from elapsed time, schedules daily watering
/// and inspection tasks, and keeps per-day completion records, notes,
/// and care tips for every tracked plant.
#[derive(Parser)]
#[command(version, about, name = "tend")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tend/tend.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tend CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking a new plant
    #[command(alias = "a")]
    Add(AddArgs),
    /// List all tracked plants
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a tracked plant
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Show the daily care checklist for a plant
    #[command(alias = "cl")]
    Checklist(ChecklistArgs),
    /// Toggle a checklist task done or not done
    #[command(alias = "c")]
    Check(CheckArgs),
    /// Stop tracking a plant permanently
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Replace the notes for a plant
    Notes(NotesArgs),
    /// List the growth plan catalog
    #[command(alias = "p")]
    Plans,
    /// Recalculate progress for all tracked plants
    Recalc,
    /// Keep progress fresh with a periodic recalculation tick
    Watch(WatchArgs),
    /// Show or refresh the care tip for a plant
    #[command(alias = "t")]
    Tips(TipsArgs),
    /// Export all tracked data as JSON
    Export(ExportArgs),
    /// Import previously exported JSON data
    Import(ImportArgs),
    /// Delete all tracked plants and tips
    Clear(ClearArgs),
}

/// Start tracking a new plant
#[derive(ClapArgs)]
pub struct AddArgs {
    /// ID of the growth plan to track against (see `tend plans`)
    pub plan_id: u64,
    /// Plant weight in kilograms, used to scale watering amounts
    #[arg(short, long)]
    pub weight: f64,
    /// Date tracking started (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<Date>,
}

impl From<AddArgs> for AddPlant {
    fn from(val: AddArgs) -> Self {
        AddPlant {
            plan_id: val.plan_id,
            weight_kg: val.weight,
            start_date: val.start_date,
        }
    }
}

/// Show details of a tracked plant
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the plant to display
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show the daily care checklist for a plant
#[derive(ClapArgs)]
pub struct ChecklistArgs {
    /// ID of the plant to build the checklist for
    pub id: u64,
    /// Date to build the checklist for (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

impl From<&ChecklistArgs> for Id {
    fn from(val: &ChecklistArgs) -> Self {
        Id { id: val.id }
    }
}

/// Toggle a checklist task done or not done
///
/// Task identifiers come from the checklist output: `water-<slot>`,
/// `disease-detection`, or `task-<id>`.
#[derive(ClapArgs)]
pub struct CheckArgs {
    /// ID of the tracked plant
    pub plant_id: u64,
    /// Identifier of the task to toggle
    pub task: TaskId,
    /// Date of the completion record (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

impl From<CheckArgs> for ToggleTask {
    fn from(val: CheckArgs) -> Self {
        ToggleTask {
            plant_id: val.plant_id,
            task: val.task,
            date: val.date,
        }
    }
}

/// Stop tracking a plant permanently
#[derive(ClapArgs)]
pub struct RemoveArgs {
    /// ID of the plant to remove
    pub id: u64,
    /// Confirm the removal (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RemoveArgs> for RemovePlant {
    fn from(val: RemoveArgs) -> Self {
        RemovePlant {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Replace the notes for a plant
#[derive(ClapArgs)]
pub struct NotesArgs {
    /// ID of the tracked plant
    pub id: u64,
    /// New notes text, replacing any previous notes
    pub notes: String,
}

impl From<NotesArgs> for SetNotes {
    fn from(val: NotesArgs) -> Self {
        SetNotes {
            id: val.id,
            notes: val.notes,
        }
    }
}

/// Keep progress fresh with a periodic recalculation tick
#[derive(ClapArgs)]
pub struct WatchArgs {
    /// Hours between recalculation ticks
    #[arg(long, default_value_t = 24)]
    pub interval_hours: u64,
}

/// Show or refresh the care tip for a plant
#[derive(ClapArgs)]
pub struct TipsArgs {
    /// ID of the tracked plant
    pub id: u64,
    /// Regenerate the tip instead of showing the stored one
    #[arg(long)]
    pub refresh: bool,
    /// Shell command generating the tip: prompt on stdin, markdown on
    /// stdout. Defaults to $TEND_TIPS_COMMAND
    #[arg(long)]
    pub command: Option<String>,
}

impl From<&TipsArgs> for Id {
    fn from(val: &TipsArgs) -> Self {
        Id { id: val.id }
    }
}

/// Export all tracked data as JSON
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// File to write to; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Import previously exported JSON data
#[derive(ClapArgs)]
pub struct ImportArgs {
    /// File containing a previously exported document
    pub input: PathBuf,
}

/// Delete all tracked plants and tips
#[derive(ClapArgs)]
pub struct ClearArgs {
    /// Confirm the wipe (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}
