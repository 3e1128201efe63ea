// ============================================================
// Layer 4 — Synthetic Data Generator
// ============================================================
// This tool has no real data source, so the generator stands
// in for one: every feature value is an independent uniform
// draw in [0, 1), and the label comes from the deterministic
// threshold rule in the domain layer.
//
// Contract:
//   generate(n, rng) → exactly n samples, for any n ≥ 0,
//   each with a (7 × 4) window and a one-hot 5-class label.
//   Generation never fails.
//
// The RNG is passed in (not thread_rng) so a run is fully
// reproducible from its --seed flag.

use rand::Rng;

use crate::data::dataset::MoodSample;
use crate::domain::mood::Mood;
use crate::domain::window::FeatureWindow;
use crate::domain::{LOOKBACK_DAYS, NUM_FEATURES};

/// Generate `count` labelled samples from the given RNG.
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<MoodSample> {
    (0..count)
        .map(|_| {
            let window = random_window(rng);
            let mood   = Mood::from_window(&window);
            MoodSample::new(&window, mood)
        })
        .collect()
}

/// One window of independent uniform draws in [0, 1).
fn random_window(rng: &mut impl Rng) -> FeatureWindow {
    let mut grid = [[0.0f32; NUM_FEATURES]; LOOKBACK_DAYS];
    for day in grid.iter_mut() {
        for value in day.iter_mut() {
            *value = rng.gen::<f32>();
        }
    }
    FeatureWindow(grid)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NUM_CLASSES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate(0, &mut rng).len(), 0);
        assert_eq!(generate(1, &mut rng).len(), 1);
        assert_eq!(generate(250, &mut rng).len(), 250);
    }

    #[test]
    fn test_sample_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        for sample in generate(100, &mut rng) {
            assert_eq!(sample.features.len(), LOOKBACK_DAYS * NUM_FEATURES);
            assert_eq!(sample.label.len(), NUM_CLASSES);
        }
    }

    #[test]
    fn test_features_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        for sample in generate(500, &mut rng) {
            for &v in &sample.features {
                assert!((0.0..1.0).contains(&v), "feature {v} outside [0, 1)");
            }
        }
    }

    #[test]
    fn test_labels_are_one_hot() {
        let mut rng = StdRng::seed_from_u64(42);
        for sample in generate(500, &mut rng) {
            let sum: f32 = sample.label.iter().sum();
            assert_eq!(sum, 1.0);
            let ones = sample.label.iter().filter(|&&v| v == 1.0).count();
            assert_eq!(ones, 1);
            assert_eq!(sample.label[sample.class], 1.0);
        }
    }

    #[test]
    fn test_class_matches_rule() {
        // The stored class index must be exactly what the rule assigns
        // to the stored features.
        let mut rng = StdRng::seed_from_u64(9);
        for sample in generate(200, &mut rng) {
            let mut grid = [[0.0f32; NUM_FEATURES]; LOOKBACK_DAYS];
            for (d, day) in grid.iter_mut().enumerate() {
                for (c, value) in day.iter_mut().enumerate() {
                    *value = sample.features[d * NUM_FEATURES + c];
                }
            }
            let mood = Mood::from_window(&FeatureWindow(grid));
            assert_eq!(mood.class_index(), sample.class);
        }
    }

    #[test]
    fn test_same_seed_same_samples() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        let sa = generate(50, &mut a);
        let sb = generate(50, &mut b);
        for (x, y) in sa.iter().zip(sb.iter()) {
            assert_eq!(x.features, y.features);
            assert_eq!(x.class, y.class);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let sa = generate(10, &mut a);
        let sb = generate(10, &mut b);
        assert!(sa.iter().zip(sb.iter()).any(|(x, y)| x.features != y.features));
    }
}
