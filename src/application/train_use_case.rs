// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full pipeline in order:
//
//   Step 1: Generate synthetic training set   (Layer 4 - data)
//   Step 2: Generate held-out validation set  (Layer 4 - data)
//   Step 3: Build datasets                    (Layer 4 - data)
//   Step 4: Save config                       (Layer 6 - infra)
//   Step 5: Run training loop                 (Layer 5 - ml)
//   Step 6: Report final accuracies
//   Step 7: Export the mobile artifact        (Layer 6 - infra)
//
// Strictly sequential, all-or-nothing: any error aborts the run
// before the artifact exists.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::application::export_use_case::ExportUseCase;
use crate::data::{dataset::MoodDataset, generator};
use crate::infra::{checkpoint::CheckpointManager, metrics::MetricsLogger};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All parameters for a training run. Serialisable so it can be
// saved next to the checkpoints and reloaded by `export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub checkpoint_dir: String,
    pub output_path:    String,
    pub train_samples:  usize,
    pub val_samples:    usize,
    pub epochs:         usize,
    pub batch_size:     usize,
    pub lr:             f64,
    pub hidden_size:    usize,
    pub dense_size:     usize,
    pub dropout:        f64,
    pub seed:           u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            checkpoint_dir: "checkpoints".to_string(),
            output_path:    "assets/models/mood_predictor.bin".to_string(),
            train_samples:  1000,
            val_samples:    200,
            epochs:         50,
            batch_size:     32,
            lr:             1e-3,
            hidden_size:    32,
            dense_size:     16,
            dropout:        0.2,
            seed:           42,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end.
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Steps 1–2: Generate synthetic data ────────────────────────────────
        // One seeded RNG drives both sets, so a run is fully
        // reproducible from its --seed flag. The validation set
        // comes from the same distribution but is held out.
        println!("Generating synthetic data...");
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let train_samples = generator::generate(cfg.train_samples, &mut rng);
        let val_samples   = generator::generate(cfg.val_samples, &mut rng);
        tracing::info!(
            "Generated {} training and {} validation samples",
            train_samples.len(), val_samples.len()
        );

        // ── Step 3: Build Burn datasets ───────────────────────────────────────
        let train_dataset = MoodDataset::new(train_samples);
        let val_dataset   = MoodDataset::new(val_samples);

        // ── Step 4: Save config for re-export ────────────────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        ckpt_manager.save_config(cfg)?;
        let metrics_logger = MetricsLogger::new(&cfg.checkpoint_dir)?;

        // ── Step 5: Run training loop (Layer 5) ───────────────────────────────
        println!("Training model...");
        let history = run_training(cfg, train_dataset, val_dataset, ckpt_manager, metrics_logger)?;

        // ── Step 6: Report final accuracies ───────────────────────────────────
        if let (Some(train_acc), Some(val_acc)) =
            (history.final_train_accuracy(), history.final_val_accuracy())
        {
            println!("\nFinal accuracy: {train_acc:.4}");
            println!("Validation accuracy: {val_acc:.4}");
        }

        // ── Step 7: Export the mobile artifact ────────────────────────────────
        println!("\nConverting to mobile format...");
        ExportUseCase::new(&cfg.checkpoint_dir, &cfg.output_path).execute()?;

        Ok(())
    }
}
