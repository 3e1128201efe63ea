// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types that define the core concepts of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums and constants
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

// The five mood classes and the label-assignment rule
pub mod mood;

// One sample's lookback window of feature channels
pub mod window;

/// Number of consecutive time steps of feature history per sample.
pub const LOOKBACK_DAYS: usize = 7;

/// Number of feature channels tracked per time step.
pub const NUM_FEATURES: usize = 4;

/// Number of mutually exclusive mood classes.
pub const NUM_CLASSES: usize = 5;
