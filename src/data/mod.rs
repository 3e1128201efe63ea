// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between "nothing" and GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   seeded RNG
//       │
//       ▼
//   Generator      → uniform random windows + rule-derived labels
//       │
//       ▼
//   MoodDataset    → implements Burn's Dataset trait
//       │
//       ▼
//   MoodBatcher    → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader     → feeds batches to the training loop
//
// There is no loading step: this tool has no real data source,
// the generator IS the source.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Synthetic sample generation from a seeded RNG
pub mod generator;

/// Implements Burn's Dataset trait for mood samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
