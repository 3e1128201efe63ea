// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn model code. The architecture is
// deliberately fixed — the tool trains exactly one topology:
//
//   model.rs   — the LSTM classifier
//                • LSTM over the 7-step window (hidden 32)
//                • Dense 32 → 16 with ReLU
//                • Dropout 0.2 (training only)
//                • Dense 16 → 5 class logits
//
//   trainer.rs — the training loop
//                Forward pass, cross-entropy loss, backward
//                pass, Adam step, per-epoch validation,
//                metrics logging and checkpoint saving
//
// Reference: Burn Book §3 (Building Blocks), §5 (Training)
//            Hochreiter & Schmidhuber (1997) LSTM

/// The fixed-topology mood classifier
pub mod model;

/// Full training loop with validation, metrics and checkpoints
pub mod trainer;
