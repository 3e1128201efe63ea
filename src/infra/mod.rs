// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one
// business layer:
//
//   checkpoint.rs — Saving and restoring model weights.
//                   Uses Burn's CompactRecorder and keeps the
//                   TrainConfig as JSON next to the weights so
//                   `export` can rebuild the exact architecture.
//
//   metrics.rs    — Per-epoch loss/accuracy CSV log.
//
//   exporter.rs   — The final artifact writer. Serializes the
//                   trained model at half precision into one
//                   compact binary for on-device inference.
//
// Reference: Rust Book §7 (Modules), §9 (Error Handling)
//            Burn Book §5 (Records and Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;

/// Quantized artifact export
pub mod exporter;
