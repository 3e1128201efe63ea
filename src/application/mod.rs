// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal (a full training run, or re-exporting an artifact).
//
// Rules for this layer:
//   - No ML math or model code here
//   - No argument parsing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// The full generate → train → export pipeline
pub mod train_use_case;

// Re-export an artifact from an existing checkpoint
pub mod export_use_case;
