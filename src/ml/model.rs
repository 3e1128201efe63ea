use burn::{
    nn::{
        Dropout, DropoutConfig,
        Linear, LinearConfig,
        Lstm, LstmConfig,
    },
    prelude::*,
    tensor::backend::AutodiffBackend,
};

use crate::domain::{NUM_CLASSES, NUM_FEATURES};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct MoodModelConfig {
    pub hidden_size: usize,
    pub dense_size:  usize,
    pub dropout:     f64,
}

impl MoodModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> MoodModel<B> {
        let lstm    = LstmConfig::new(NUM_FEATURES, self.hidden_size, true).init(device);
        let dense   = LinearConfig::new(self.hidden_size, self.dense_size).init(device);
        let dropout = DropoutConfig::new(self.dropout).init();
        let output  = LinearConfig::new(self.dense_size, NUM_CLASSES).init(device);
        MoodModel { lstm, dense, dropout, output }
    }
}

#[derive(Module, Debug)]
pub struct MoodModel<B: Backend> {
    pub lstm:    Lstm<B>,
    pub dense:   Linear<B>,
    pub dropout: Dropout,
    pub output:  Linear<B>,
}

impl<B: Backend> MoodModel<B> {
    /// features: [batch, 7, 4] → logits: [batch, 5]
    pub fn forward(&self, features: Tensor<B, 3>) -> Tensor<B, 2> {
        // The LSTM returns per-step outputs plus the final state;
        // classification only needs the final hidden state [batch, hidden].
        let (_, state) = self.lstm.forward(features, None);
        let hidden = state.hidden;

        let x = burn::tensor::activation::relu(self.dense.forward(hidden));
        let x = self.dropout.forward(x);
        self.output.forward(x)
    }

    /// Class probabilities via softmax — rows sum to 1.
    pub fn probabilities(&self, features: Tensor<B, 3>) -> Tensor<B, 2> {
        burn::tensor::activation::softmax(self.forward(features), 1)
    }

    pub fn forward_loss(
        &self,
        features: Tensor<B, 3>,
        targets:  Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>)
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(features);
        let ce = burn::nn::loss::CrossEntropyLossConfig::new()
            .init(&logits.device());
        let loss = ce.forward(logits.clone(), targets);
        (loss, logits)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::batcher::MoodBatcher;
    use crate::data::generator::generate;
    use crate::domain::LOOKBACK_DAYS;
    use burn::data::dataloader::batcher::Batcher;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type TestBackend = burn::backend::NdArray;

    fn test_model(device: &<TestBackend as Backend>::Device) -> MoodModel<TestBackend> {
        MoodModelConfig::new(32, 16, 0.2).init(device)
    }

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model  = test_model(&device);
        let input  = Tensor::<TestBackend, 3>::zeros([3, LOOKBACK_DAYS, NUM_FEATURES], &device);
        assert_eq!(model.forward(input).dims(), [3, NUM_CLASSES]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let device  = Default::default();
        let model   = test_model(&device);
        let mut rng = StdRng::seed_from_u64(11);
        let batch   = MoodBatcher::<TestBackend>::new(device).batch(generate(4, &mut rng));

        let probs: Vec<f32> = model
            .probabilities(batch.features)
            .into_data()
            .to_vec::<f32>()
            .unwrap_or_default();

        for row in probs.chunks(NUM_CLASSES) {
            let sum: f32 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4, "softmax row summed to {sum}");
            assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
        }
    }
}
