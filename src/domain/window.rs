// ============================================================
// Layer 3 — FeatureWindow Domain Type
// ============================================================
// One sample's worth of feature history: a fixed grid of
// LOOKBACK_DAYS time steps × NUM_FEATURES channels.
//
// The values carry no real-world semantics in this tool —
// the generator fills them with uniform random draws — but
// the shape is the contract every later stage depends on.

use crate::domain::{LOOKBACK_DAYS, NUM_FEATURES};

/// A fixed-size lookback window of feature values.
///
/// Indexed as `window[day][channel]`. Row-major flattening
/// (day-by-day) is the layout the batcher assumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWindow(pub [[f32; NUM_FEATURES]; LOOKBACK_DAYS]);

impl FeatureWindow {
    /// Mean of one feature channel across all time steps.
    ///
    /// Panics if `channel >= NUM_FEATURES` (indexing bug, not input error).
    pub fn channel_mean(&self, channel: usize) -> f32 {
        let sum: f32 = self.0.iter().map(|day| day[channel]).sum();
        sum / LOOKBACK_DAYS as f32
    }

    /// Flatten to `LOOKBACK_DAYS * NUM_FEATURES` values, day-major.
    pub fn flatten(&self) -> Vec<f32> {
        self.0.iter().flat_map(|day| day.iter().copied()).collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn constant_window(v: f32) -> FeatureWindow {
        FeatureWindow([[v; NUM_FEATURES]; LOOKBACK_DAYS])
    }

    #[test]
    fn test_channel_mean_of_constant_window() {
        let w = constant_window(0.25);
        for c in 0..NUM_FEATURES {
            assert!((w.channel_mean(c) - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_channel_mean_uses_only_its_channel() {
        let mut grid = [[0.0f32; NUM_FEATURES]; LOOKBACK_DAYS];
        for day in grid.iter_mut() {
            day[2] = 1.0;
        }
        let w = FeatureWindow(grid);
        assert!((w.channel_mean(2) - 1.0).abs() < 1e-6);
        assert!((w.channel_mean(0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_flatten_length_and_order() {
        let mut grid = [[0.0f32; NUM_FEATURES]; LOOKBACK_DAYS];
        grid[0][0] = 1.0;
        grid[0][NUM_FEATURES - 1] = 2.0;
        grid[LOOKBACK_DAYS - 1][0] = 3.0;
        let flat = FeatureWindow(grid).flatten();
        assert_eq!(flat.len(), LOOKBACK_DAYS * NUM_FEATURES);
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[NUM_FEATURES - 1], 2.0);
        assert_eq!(flat[(LOOKBACK_DAYS - 1) * NUM_FEATURES], 3.0);
    }
}
