// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Rebuilds the trained model from the latest checkpoint and
// writes the half-precision mobile artifact. Used both as the
// final step of `train` and standalone via the `export`
// subcommand (re-export without retraining).

use anyhow::Result;

use crate::infra::{checkpoint::CheckpointManager, exporter::ModelExporter};
use crate::ml::model::{MoodModel, MoodModelConfig};

type InferBackend = burn::backend::NdArray;

pub struct ExportUseCase {
    checkpoint_dir: String,
    output_path:    String,
}

impl ExportUseCase {
    pub fn new(checkpoint_dir: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
            output_path:    output_path.into(),
        }
    }

    pub fn execute(&self) -> Result<()> {
        let ckpt_manager = CheckpointManager::new(&self.checkpoint_dir);
        let cfg = ckpt_manager.load_config()?;

        // Rebuild the exact trained architecture, dropout disabled —
        // the exported graph is inference-only.
        let device = burn::backend::ndarray::NdArrayDevice::Cpu;
        let model: MoodModel<InferBackend> =
            MoodModelConfig::new(cfg.hidden_size, cfg.dense_size, 0.0).init(&device);
        let model = ckpt_manager.load_model(model, &device)?;

        let exporter = ModelExporter::new(&self.output_path);
        let size = exporter.export(&model)?;

        println!("Model saved to {}", exporter.artifact_path().display());
        println!("Model size: {:.2} KB", size as f64 / 1024.0);
        Ok(())
    }
}
