use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::mood::Mood;
use crate::domain::window::FeatureWindow;
use crate::domain::NUM_CLASSES;

/// One labelled training sample: a feature window plus its
/// rule-assigned mood, kept both one-hot and as a class index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodSample {
    /// Flattened feature window, day-major: 7 × 4 = 28 values in [0, 1)
    pub features: Vec<f32>,
    /// One-hot label over the 5 classes — exactly one entry is 1.0
    pub label: [f32; NUM_CLASSES],
    /// The same label as a class index (what cross-entropy wants)
    pub class: usize,
}

impl MoodSample {
    pub fn new(window: &FeatureWindow, mood: Mood) -> Self {
        Self {
            features: window.flatten(),
            label:    mood.one_hot(),
            class:    mood.class_index(),
        }
    }
}

pub struct MoodDataset {
    samples: Vec<MoodSample>,
}

impl MoodDataset {
    pub fn new(samples: Vec<MoodSample>) -> Self {
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Dataset<MoodSample> for MoodDataset {
    fn get(&self, index: usize) -> Option<MoodSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
