//! Command handlers bridging parsed arguments to the plant store.
//!
//! Each handler converts its argument wrapper into core parameters,
//! calls the store, and renders the result as markdown. Lookup misses
//! render a failure status; everything else propagates as an error.

use anyhow::{Context, Result};
use jiff::Zoned;
use log::info;
use tend_core::{
    display::{
        CatalogPlans, CreateResult, DeleteResult, OperationStatus, PlantDetail, ToggleResult,
        UpdateResult,
    },
    params::{AddPlant, Id, RemovePlant, SetNotes, ToggleTask},
    PlantStore, UserData,
};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::args::{
    AddArgs, CheckArgs, ChecklistArgs, ClearArgs, ExportArgs, ImportArgs, NotesArgs, RemoveArgs,
    ShowArgs, TipsArgs, WatchArgs,
};
use crate::renderer::TerminalRenderer;
use crate::tips::CommandTipGenerator;

/// CLI command dispatcher holding the store and the output renderer.
pub struct Cli {
    store: PlantStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlantStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let params: AddPlant = args.into();
        let plant = self.store.add_plant(&params).await?;
        info!("Tracking new plant {}", plant.id);
        self.renderer.render(&CreateResult::new(plant).to_string())
    }

    pub async fn list(&self) -> Result<()> {
        let today = Zoned::now().date();
        let summaries = self.store.list_plants_summary(today).await?;
        self.renderer.render(&summaries.to_string())
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let params: Id = args.into();
        match self.store.get_plant(&params).await? {
            Some(plant) => {
                let plan = self.store.catalog().get(plant.plan_id);
                self.renderer
                    .render(&PlantDetail::new(&plant, plan).to_string())
            }
            None => self.render_missing(params.id),
        }
    }

    pub async fn checklist(&self, args: ChecklistArgs) -> Result<()> {
        let now = Zoned::now();
        let as_of = match args.date {
            Some(date) => date.to_datetime(now.time()),
            None => now.datetime(),
        };
        let checklist = self.store.checklist(&Id::from(&args), as_of).await?;
        self.renderer.render(&checklist.to_string())
    }

    pub async fn check(&self, args: CheckArgs) -> Result<()> {
        let params: ToggleTask = args.into();
        let date = params.date.unwrap_or_else(|| Zoned::now().date());
        let task = params.task;
        let plant = self.store.toggle_task(&params).await?;
        let result = ToggleResult {
            plant_id: plant.id,
            task,
            date,
            completed: plant.is_completed(date, &task),
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn remove(&self, args: RemoveArgs) -> Result<()> {
        let params: RemovePlant = args.into();
        match self.store.remove_plant(&params).await? {
            Some(plant) => {
                info!("Removed plant {}", plant.id);
                self.renderer.render(&DeleteResult::new(plant).to_string())
            }
            None => self.render_missing(params.id),
        }
    }

    pub async fn notes(&self, args: NotesArgs) -> Result<()> {
        let params: SetNotes = args.into();
        let plant = self.store.set_notes(&params).await?;
        let result = UpdateResult::with_changes(plant, vec!["Replaced notes".to_string()]);
        self.renderer.render(&result.to_string())
    }

    pub async fn plans(&self) -> Result<()> {
        let plans = CatalogPlans(self.store.catalog().plans().to_vec());
        self.renderer.render(&plans.to_string())
    }

    pub async fn recalc(&self) -> Result<()> {
        let touched = self.store.recalculate_all(Zoned::now().date()).await?;
        let status =
            OperationStatus::success(format!("Recalculated progress for {touched} plants"));
        self.renderer.render(&status.to_string())
    }

    /// Runs the periodic recalculation tick until interrupted.
    ///
    /// The first tick fires immediately; missed ticks coalesce instead
    /// of bursting, so a suspended machine catches up with one pass.
    pub async fn watch(&self, args: WatchArgs) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(args.interval_hours * 60 * 60));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(
            "Watching tracked plants, recalculating every {} hours",
            args.interval_hours
        );
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let touched = self.store.recalculate_all(Zoned::now().date()).await?;
                    info!("Recalculated progress for {touched} plants");
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping watch");
                    return Ok(());
                }
            }
        }
    }

    pub async fn tips(&self, args: TipsArgs) -> Result<()> {
        let params = Id::from(&args);
        if !args.refresh {
            return match self.store.tip(&params).await? {
                Some(tip) => self.renderer.render(&tip),
                None => self.renderer.render(
                    &OperationStatus::failure(format!(
                        "No tip stored for plant {}; run with --refresh to generate one",
                        params.id
                    ))
                    .to_string(),
                ),
            };
        }

        let command = args
            .command
            .or_else(|| std::env::var("TEND_TIPS_COMMAND").ok())
            .context("No tip command configured; pass --command or set TEND_TIPS_COMMAND")?;
        let generator = CommandTipGenerator::new(command);
        match self.store.refresh_tip(&params, &generator).await? {
            Some(tip) => self.renderer.render(&tip),
            None => self.renderer.render(
                &OperationStatus::failure(
                    "Tip generation failed; any previously stored tip was kept",
                )
                .to_string(),
            ),
        }
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let data = self.store.export_data().await?;
        let json = serde_json::to_string_pretty(&data)?;
        match args.output {
            Some(path) => {
                std::fs::write(&path, &json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status =
                    OperationStatus::success(format!("Exported data to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let json = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?;
        let data: UserData = serde_json::from_str(&json)
            .with_context(|| format!("{} is not a valid export document", args.input.display()))?;

        let plants = data.tracked_plants.as_ref().map_or(0, Vec::len);
        let tips = data.growth_tips.as_ref().map_or(0, |t| t.len());
        self.store.import_data(data).await?;
        info!("Imported {plants} plants and {tips} tips");

        let status = OperationStatus::success(format!(
            "Imported {plants} plants and {tips} tips from {}",
            args.input.display()
        ));
        self.renderer.render(&status.to_string())
    }

    pub async fn clear(&self, args: ClearArgs) -> Result<()> {
        self.store.clear_all(args.confirm).await?;
        let status = OperationStatus::success("All tracked plants and tips deleted");
        self.renderer.render(&status.to_string())
    }

    fn render_missing(&self, id: u64) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(format!("No plant with ID {id}")).to_string())
    }
}
