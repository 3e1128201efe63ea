// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `train` and `export` subcommands and their flags.
// clap's derive macros generate help text, error messages and
// type conversion for every field.

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: generate data, train, export the artifact
    Train(TrainArgs),

    /// Re-export the artifact from an existing checkpoint (no retraining)
    Export(ExportArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory to save per-epoch checkpoints and the metrics CSV
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Where to write the exported mobile artifact
    #[arg(long, default_value = "assets/models/mood_predictor.bin")]
    pub output: String,

    /// Number of synthetic training samples to generate
    #[arg(long, default_value_t = 1000)]
    pub train_samples: usize,

    /// Number of held-out synthetic validation samples
    #[arg(long, default_value_t = 200)]
    pub val_samples: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 50)]
    pub epochs: usize,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Width of the LSTM hidden state
    #[arg(long, default_value_t = 32)]
    pub hidden_size: usize,

    /// Width of the dense layer between the LSTM and the output
    #[arg(long, default_value_t = 16)]
    pub dense_size: usize,

    /// Dropout probability — randomly zeroes activations during training
    #[arg(long, default_value_t = 0.2)]
    pub dropout: f64,

    /// Seed for data generation, weight init and batch shuffling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            checkpoint_dir: a.checkpoint_dir,
            output_path:    a.output,
            train_samples:  a.train_samples,
            val_samples:    a.val_samples,
            epochs:         a.epochs,
            batch_size:     a.batch_size,
            lr:             a.lr,
            hidden_size:    a.hidden_size,
            dense_size:     a.dense_size,
            dropout:        a.dropout,
            seed:           a.seed,
        }
    }
}

/// All arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory where checkpoints were saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Where to write the exported mobile artifact
    #[arg(long, default_value = "assets/models/mood_predictor.bin")]
    pub output: String,
}
