// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full train + validation loop using Burn's DataLoader and Adam.
//
// Backend notes:
//   - Training uses TrainBackend (Autodiff<NdArray>) for gradients
//   - model.valid() returns the model on ValidBackend (NdArray)
//   - Validation batcher must also use ValidBackend
//   - argmax(1) returns [batch,1] so we flatten before .equal()
//
// The model is tiny (a few thousand parameters) so the CPU
// ndarray backend is the right fit — no GPU setup required.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::MoodBatcher, dataset::MoodDataset};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{EpochMetrics, MetricsLogger, TrainingHistory};
use crate::ml::model::{MoodModel, MoodModelConfig};

type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;
type ValidBackend = burn::backend::NdArray;

pub fn run_training(
    cfg:            &TrainConfig,
    train_dataset:  MoodDataset,
    val_dataset:    MoodDataset,
    ckpt_manager:   CheckpointManager,
    metrics_logger: MetricsLogger,
) -> Result<TrainingHistory> {
    let device = burn::backend::ndarray::NdArrayDevice::Cpu;
    // Seed the backend so weight init and dropout are reproducible
    TrainBackend::seed(cfg.seed);
    train_loop(cfg, train_dataset, val_dataset, ckpt_manager, metrics_logger, device)
}

fn train_loop(
    cfg:            &TrainConfig,
    train_dataset:  MoodDataset,
    val_dataset:    MoodDataset,
    ckpt_manager:   CheckpointManager,
    metrics_logger: MetricsLogger,
    device:         burn::backend::ndarray::NdArrayDevice,
) -> Result<TrainingHistory> {

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = MoodModelConfig::new(cfg.hidden_size, cfg.dense_size, cfg.dropout);
    let mut model: MoodModel<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: lstm hidden={}, dense={}, dropout={}",
        cfg.hidden_size, cfg.dense_size, cfg.dropout
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Training data loader (AutodiffBackend) ────────────────────────────────
    let train_batcher = MoodBatcher::<TrainBackend>::new(device);
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    // ── Validation data loader (inner backend — no autodiff overhead) ─────────
    let val_batcher = MoodBatcher::<ValidBackend>::new(device);
    let val_loader  = DataLoaderBuilder::new(val_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(val_dataset);

    let mut history = TrainingHistory::default();

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {

        // ── Training phase ────────────────────────────────────────────────────
        let mut train_loss_sum = 0.0f64;
        let mut train_batches  = 0usize;
        let mut train_correct  = 0usize;
        let mut train_total    = 0usize;

        for batch in train_loader.iter() {
            let (loss, logits) = model.forward_loss(batch.features, batch.targets.clone());

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            train_loss_sum += loss_val;
            train_batches  += 1;

            // argmax(1) returns shape [batch, 1] — flatten to [batch]
            // before comparing with targets which is [batch]
            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            let correct: i64 = predicted
                .equal(batch.targets.clone())
                .int().sum().into_scalar().elem::<i64>();
            train_correct += correct as usize;
            train_total   += batch.targets.dims()[0];

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_train_loss = if train_batches > 0 {
            train_loss_sum / train_batches as f64
        } else { f64::NAN };
        let train_acc = if train_total > 0 {
            train_correct as f64 / train_total as f64
        } else { 0.0 };

        // ── Validation phase ──────────────────────────────────────────────────
        // model.valid() → MoodModel<ValidBackend>
        // dropout disabled for deterministic evaluation
        let model_valid = model.valid();

        let mut val_loss_sum = 0.0f64;
        let mut val_batches  = 0usize;
        let mut val_correct  = 0usize;
        let mut val_total    = 0usize;

        for batch in val_loader.iter() {
            let logits = model_valid.forward(batch.features);

            let ce = burn::nn::loss::CrossEntropyLossConfig::new()
                .init(&logits.device());
            let batch_loss: f64 = ce
                .forward(logits.clone(), batch.targets.clone())
                .into_scalar().elem::<f64>();
            val_loss_sum += batch_loss;
            val_batches  += 1;

            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            let correct: i64 = predicted
                .equal(batch.targets.clone())
                .int().sum().into_scalar().elem::<i64>();
            val_correct += correct as usize;
            val_total   += batch.targets.dims()[0];
        }

        let avg_val_loss = if val_batches > 0 { val_loss_sum / val_batches as f64 } else { f64::NAN };
        let val_acc      = if val_total   > 0 { val_correct as f64 / val_total as f64 } else { 0.0 };

        println!(
            "Epoch {:>3}/{} | train_loss={:.4} | train_acc={:.1}% | val_loss={:.4} | val_acc={:.1}%",
            epoch, cfg.epochs, avg_train_loss, train_acc * 100.0,
            avg_val_loss, val_acc * 100.0,
        );

        let metrics = EpochMetrics::new(epoch, avg_train_loss, train_acc, avg_val_loss, val_acc);
        metrics_logger.log(&metrics)?;
        history.push(metrics);

        ckpt_manager.save_model(&model, epoch)?;
        tracing::debug!("Checkpoint saved for epoch {}", epoch);
    }

    tracing::info!("Training complete!");
    Ok(history)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::{env, fs, path::PathBuf};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir()
            .join(format!("mood_trainer_test_{}_{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_short_run_reports_sane_metrics() {
        let mut rng = StdRng::seed_from_u64(5);
        let train = MoodDataset::new(generate(64, &mut rng));
        let val   = MoodDataset::new(generate(32, &mut rng));

        let dir  = temp_dir("smoke");
        let path = dir.to_string_lossy().to_string();
        let cfg  = TrainConfig {
            epochs: 2,
            train_samples: 64,
            val_samples: 32,
            checkpoint_dir: path.clone(),
            ..TrainConfig::default()
        };

        let history = run_training(
            &cfg,
            train,
            val,
            CheckpointManager::new(path.clone()),
            MetricsLogger::new(path).unwrap(),
        )
        .unwrap();

        assert_eq!(history.epochs.len(), 2);
        for m in &history.epochs {
            assert!(m.train_loss.is_finite());
            assert!(m.val_loss.is_finite());
            assert!((0.0..=1.0).contains(&m.train_acc));
            assert!((0.0..=1.0).contains(&m.val_acc));
        }

        // Checkpoints and metrics land in the run directory
        assert!(dir.join("latest_epoch.json").exists());
        assert!(dir.join("metrics.csv").exists());

        fs::remove_dir_all(dir).ok();
    }
}
