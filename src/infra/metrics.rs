// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records training metrics to a CSV file after each epoch.
//
// Metrics recorded per epoch:
//   - epoch:      the epoch number (1, 2, 3, ...)
//   - train_loss: average cross-entropy loss on the training set
//   - train_acc:  fraction of training samples classified correctly
//   - val_loss:   average cross-entropy loss on the validation set
//   - val_acc:    fraction of validation samples classified correctly
//
// Output file: checkpoints/metrics.csv
//
// Example CSV output:
//   epoch,train_loss,train_acc,val_loss,val_acc
//   1,1.589321,0.231000,1.562044,0.245000
//   2,1.488270,0.364000,1.471189,0.380000
//   ...

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

/// One row of metrics data for a single training epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub epoch: usize,

    /// Average cross-entropy loss over all training batches.
    /// Random initialisation gives ~ln(5) ≈ 1.61 for 5 classes.
    pub train_loss: f64,

    /// Fraction of training samples classified correctly, in [0, 1]
    pub train_acc: f64,

    /// Average cross-entropy loss on the validation set.
    /// Divergence from train_loss indicates overfitting.
    pub val_loss: f64,

    /// Fraction of validation samples classified correctly, in [0, 1]
    pub val_acc: f64,
}

impl EpochMetrics {
    pub fn new(
        epoch:      usize,
        train_loss: f64,
        train_acc:  f64,
        val_loss:   f64,
        val_acc:    f64,
    ) -> Self {
        Self { epoch, train_loss, train_acc, val_loss, val_acc }
    }

    /// Returns true if this epoch improved over the previous best val_loss.
    pub fn is_improvement(&self, best_val_loss: f64) -> bool {
        self.val_loss < best_val_loss
    }
}

/// The per-epoch metrics of one full training run, in epoch order.
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    pub epochs: Vec<EpochMetrics>,
}

impl TrainingHistory {
    pub fn push(&mut self, metrics: EpochMetrics) {
        self.epochs.push(metrics);
    }

    pub fn final_train_accuracy(&self) -> Option<f64> {
        self.epochs.last().map(|m| m.train_acc)
    }

    pub fn final_val_accuracy(&self) -> Option<f64> {
        self.epochs.last().map(|m| m.val_acc)
    }
}

/// Logs epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        // Header only for a new file — appending across runs keeps
        // earlier epochs in the log.
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "epoch,train_loss,train_acc,val_loss,val_acc")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;

        writeln!(
            f,
            "{},{:.6},{:.6},{:.6},{:.6}",
            m.epoch, m.train_loss, m.train_acc, m.val_loss, m.val_acc,
        )?;

        tracing::debug!(
            "Logged epoch {} metrics: train_loss={:.4}, val_loss={:.4}",
            m.epoch, m.train_loss, m.val_loss,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_improvement() {
        let m = EpochMetrics::new(2, 1.2, 0.5, 1.1, 0.5);
        assert!(m.is_improvement(1.5));
        assert!(!m.is_improvement(1.0));
    }

    #[test]
    fn test_history_final_accuracies() {
        let mut h = TrainingHistory::default();
        assert!(h.final_train_accuracy().is_none());

        h.push(EpochMetrics::new(1, 1.5, 0.3, 1.4, 0.35));
        h.push(EpochMetrics::new(2, 1.2, 0.6, 1.3, 0.55));

        assert_eq!(h.final_train_accuracy(), Some(0.6));
        assert_eq!(h.final_val_accuracy(), Some(0.55));
    }
}
