//! Protocol constants for the blind evaluation sample.
//!
//! These values are fixed by the documented curation protocol, not derived
//! from data. Fraction arrays are ordered by the canonical declaration order
//! of the matching enum in [`crate::core::types`].

/// Random seed documented by the protocol.
pub const DEFAULT_SEED: u64 = 42;

/// Total size of the blind evaluation sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Tolerance when checking that target fractions sum to 1.0.
pub const FRACTION_TOLERANCE: f64 = 1e-6;

/// Size of the full labeled pool (train.txt + test.txt).
pub const EXPECTED_POOL_SIZE: usize = 1031;

/// Default sentiment target fractions: Negative, Neutral, Positive.
pub const DEFAULT_SENTIMENT_FRACTIONS: [f64; 3] = [0.60, 0.25, 0.15];

/// Default aspect target fractions in canonical aspect order:
/// Fit/Sizing, Shipping/Packaging, Material/Quality, Instructions/UX,
/// Color/Aesthetics, Comfort, Value/Price, Durability.
pub const DEFAULT_ASPECT_FRACTIONS: [f64; 8] = [0.20, 0.19, 0.18, 0.15, 0.15, 0.08, 0.03, 0.02];

/// Default fraction of the sample with implicitly mentioned aspects.
pub const DEFAULT_IMPLICIT_FRACTION: f64 = 0.65;
