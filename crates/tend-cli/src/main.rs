//! Tend CLI Application
//!
//! Command-line interface for the Tend plant cultivation tracker.

mod args;
mod cli;
mod renderer;
mod tips;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tend_core::PlantStoreBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlantStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize plant store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    info!("Tend started");

    match command {
        Some(Add(args)) => cli.add(args).await,
        Some(List) => cli.list().await,
        Some(Show(args)) => cli.show(args).await,
        Some(Checklist(args)) => cli.checklist(args).await,
        Some(Check(args)) => cli.check(args).await,
        Some(Remove(args)) => cli.remove(args).await,
        Some(Notes(args)) => cli.notes(args).await,
        Some(Plans) => cli.plans().await,
        Some(Recalc) => cli.recalc().await,
        Some(Watch(args)) => cli.watch(args).await,
        Some(Tips(args)) => cli.tips(args).await,
        Some(Export(args)) => cli.export(args).await,
        Some(Import(args)) => cli.import(args).await,
        Some(Clear(args)) => cli.clear(args).await,
        None => cli.list().await,
    }
}
