// ============================================================
// Layer 4 — Mood Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<MoodSample>
// into tensors the model can consume.
//
// Input:  Vec of N MoodSamples, each a flattened 7 × 4 window
// Output: MoodBatch with
//   features: [N, 7, 4]  float tensor
//   targets:  [N]        int class indices
//
// All windows have the same fixed size, so batching is a plain
// flatten-and-reshape with no padding step.
//
// Reference: Burn Book §4 (Batcher)

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::MoodSample;
use crate::domain::{LOOKBACK_DAYS, NUM_FEATURES};

/// A batch of mood samples ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct MoodBatch<B: Backend> {
    /// Feature windows — shape: [batch_size, 7, 4]
    pub features: Tensor<B, 3>,

    /// Ground-truth class indices — shape: [batch_size]
    /// Cross-entropy wants indices, not the one-hot rows.
    pub targets: Tensor<B, 1, Int>,
}

/// Holds the target device so tensors land on the right backend.
#[derive(Clone, Debug)]
pub struct MoodBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> MoodBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<MoodSample, MoodBatch<B>> for MoodBatcher<B> {
    fn batch(&self, items: Vec<MoodSample>) -> MoodBatch<B> {
        let batch_size = items.len();

        // Flatten all windows into one long Vec, then reshape to [N, 7, 4]
        let features_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        let features = Tensor::<B, 1>::from_floats(features_flat.as_slice(), &self.device)
            .reshape([batch_size, LOOKBACK_DAYS, NUM_FEATURES]);

        let classes: Vec<i32> = items.iter().map(|s| s.class as i32).collect();
        let targets = Tensor::<B, 1, Int>::from_ints(classes.as_slice(), &self.device);

        MoodBatch { features, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_batch_shapes() {
        let mut rng = StdRng::seed_from_u64(3);
        let items   = generate(16, &mut rng);
        let batcher = MoodBatcher::<TestBackend>::new(Default::default());

        let batch = batcher.batch(items);
        assert_eq!(batch.features.dims(), [16, LOOKBACK_DAYS, NUM_FEATURES]);
        assert_eq!(batch.targets.dims(), [16]);
    }

    #[test]
    fn test_targets_match_samples() {
        let mut rng = StdRng::seed_from_u64(3);
        let items   = generate(8, &mut rng);
        let classes: Vec<i64> = items.iter().map(|s| s.class as i64).collect();

        let batcher = MoodBatcher::<TestBackend>::new(Default::default());
        let batch   = batcher.batch(items);

        // NdArray's int element is i64
        let out: Vec<i64> = batch
            .targets
            .into_data()
            .to_vec::<i64>()
            .unwrap_or_default();
        assert_eq!(out, classes);
    }
}
