// ============================================================
// Layer 3 — Mood Domain Type
// ============================================================
// The five mood classes the model predicts, plus the
// threshold rule that assigns a mood to a feature window.
//
// The rule is an explicit placeholder standing in for real
// labelled data. It reads two channels of the window:
//   channel 1 — treated as a "stress" signal
//   channel 0 — treated as a "valence" signal
// Do not tweak the thresholds: every downstream test and the
// exported model's class indices depend on them as written.

use serde::{Deserialize, Serialize};

use crate::domain::window::FeatureWindow;
use crate::domain::NUM_CLASSES;

/// One of the five mood classes, in class-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Joy     = 0,
    Sadness = 1,
    Anxiety = 2,
    Calm    = 3,
    Stress  = 4,
}

impl Mood {
    /// All moods in class-index order.
    pub const ALL: [Mood; NUM_CLASSES] = [
        Mood::Joy,
        Mood::Sadness,
        Mood::Anxiety,
        Mood::Calm,
        Mood::Stress,
    ];

    /// The class index used in one-hot labels and model logits.
    pub fn class_index(self) -> usize {
        self as usize
    }

    /// Assign a mood from a feature window.
    ///
    /// Pure function — the same window always yields the same mood.
    /// Threshold order matters: the stress checks run before the
    /// valence check.
    pub fn from_window(window: &FeatureWindow) -> Mood {
        let avg_stress = window.channel_mean(1);

        if avg_stress > 0.7 {
            Mood::Stress
        } else if avg_stress < 0.3 {
            Mood::Joy
        } else if window.channel_mean(0) < 0.5 {
            Mood::Sadness
        } else if avg_stress > 0.5 {
            Mood::Anxiety
        } else {
            Mood::Calm
        }
    }

    /// One-hot encode this mood over the five classes.
    pub fn one_hot(self) -> [f32; NUM_CLASSES] {
        let mut label = [0.0; NUM_CLASSES];
        label[self.class_index()] = 1.0;
        label
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LOOKBACK_DAYS, NUM_FEATURES};

    /// Build a window whose channel 0 and channel 1 means are exactly
    /// the given values (remaining channels zero).
    fn window_with_means(valence: f32, stress: f32) -> FeatureWindow {
        let mut grid = [[0.0f32; NUM_FEATURES]; LOOKBACK_DAYS];
        for day in grid.iter_mut() {
            day[0] = valence;
            day[1] = stress;
        }
        FeatureWindow(grid)
    }

    #[test]
    fn test_high_stress_wins() {
        assert_eq!(Mood::from_window(&window_with_means(0.9, 0.8)), Mood::Stress);
    }

    #[test]
    fn test_low_stress_is_joy() {
        // Joy even when valence is low — the stress check runs first
        assert_eq!(Mood::from_window(&window_with_means(0.1, 0.2)), Mood::Joy);
    }

    #[test]
    fn test_mid_stress_low_valence_is_sadness() {
        assert_eq!(Mood::from_window(&window_with_means(0.4, 0.5)), Mood::Sadness);
    }

    #[test]
    fn test_mid_stress_high_valence_is_anxiety() {
        assert_eq!(Mood::from_window(&window_with_means(0.6, 0.6)), Mood::Anxiety);
    }

    #[test]
    fn test_fallthrough_is_calm() {
        assert_eq!(Mood::from_window(&window_with_means(0.6, 0.4)), Mood::Calm);
    }

    #[test]
    fn test_rule_is_deterministic() {
        let w = window_with_means(0.55, 0.45);
        assert_eq!(Mood::from_window(&w), Mood::from_window(&w));
    }

    #[test]
    fn test_one_hot_has_single_one() {
        for mood in Mood::ALL {
            let label = mood.one_hot();
            let ones = label.iter().filter(|&&v| v == 1.0).count();
            let zeros = label.iter().filter(|&&v| v == 0.0).count();
            assert_eq!(ones, 1);
            assert_eq!(zeros, NUM_CLASSES - 1);
            assert_eq!(label[mood.class_index()], 1.0);
        }
    }

    #[test]
    fn test_class_indices_cover_all_classes() {
        let mut seen = [false; NUM_CLASSES];
        for mood in Mood::ALL {
            seen[mood.class_index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
