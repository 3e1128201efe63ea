// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`  — runs the full generate → train → export pipeline
//   2. `export` — re-exports the artifact from an existing checkpoint
//
// Every flag has a default, so a bare `mood-predictor train`
// runs the whole pipeline end to end.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "mood-predictor",
    version = "0.1.0",
    about = "Train a small LSTM mood classifier on synthetic data and export it for on-device inference."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)  => Self::run_train(args),
            Commands::Export(args) => Self::run_export(args),
        }
    }

    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training run (seed={})", args.seed);

        let use_case = TrainUseCase::new(args.into());
        use_case.execute()?;

        println!("\nDone! The app loads the artifact from assets/models/.");
        Ok(())
    }

    fn run_export(args: ExportArgs) -> Result<()> {
        use crate::application::export_use_case::ExportUseCase;

        let use_case = ExportUseCase::new(args.checkpoint_dir, args.output);
        use_case.execute()
    }
}
