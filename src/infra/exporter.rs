// ============================================================
// Layer 6 — Artifact Exporter
// ============================================================
// Writes the final deliverable: one compact binary the mobile
// app ships and loads for on-device inference.
//
// Burn's BinFileRecorder with HalfPrecisionSettings:
//   - Extracts all parameters via model.into_record()
//   - Stores every f32 weight as f16 (the quantization step —
//     half the bytes of a full-precision serialization)
//   - Serialises record + module structure with bincode
//   - Writes one .bin file, overwriting any existing file
//
// Failure modes (recorder errors, filesystem errors) propagate
// unhandled — without the artifact the run has produced nothing.
//
// Reference: Burn Book §5 (Records), §6 (Import/Export)

use anyhow::{Context, Result};
use burn::{
    prelude::*,
    record::{BinFileRecorder, HalfPrecisionSettings, Recorder},
};
use std::{fs, path::PathBuf};

use crate::ml::model::MoodModel;

/// Writes a trained model as a half-precision binary artifact.
pub struct ModelExporter {
    output: PathBuf,
}

impl ModelExporter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into() }
    }

    /// The path the artifact is written to (recorder fixes the
    /// extension to .bin regardless of what was configured).
    pub fn artifact_path(&self) -> PathBuf {
        self.output.with_extension("bin")
    }

    /// Serialize the model and write the artifact.
    /// Returns the resulting file size in bytes.
    pub fn export<B: Backend>(&self, model: &MoodModel<B>) -> Result<u64> {
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create output directory '{}'", parent.display())
                })?;
            }
        }

        BinFileRecorder::<HalfPrecisionSettings>::new()
            .record(model.clone().into_record(), self.output.clone())
            .with_context(|| {
                format!("Failed to export model to '{}'", self.output.display())
            })?;

        let path = self.artifact_path();
        let size = fs::metadata(&path)
            .with_context(|| format!("Exported artifact '{}' missing", path.display()))?
            .len();

        tracing::info!("Exported model: {} ({} bytes)", path.display(), size);
        Ok(size)
    }
}
