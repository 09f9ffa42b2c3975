//! # review-sampler
//!
//! Deterministic stratified sampling of labeled product reviews for blind
//! evaluation sets.
//!
//! Given a pool of reviews labeled with a star rating, an aspect category,
//! and an implicit/explicit aspect-mention flag, the sampler selects a
//! fixed-size subset whose marginal distributions over sentiment, aspect,
//! and mention match configured target fractions as closely as integer
//! rounding allows. The draw is reproducible: the same pool and the same
//! spec always yield byte-identical output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use review_sampler::{PoolLoader, SampleSpec, StratifiedSampler};
//!
//! # fn main() -> review_sampler::Result<()> {
//! let pool = PoolLoader::new().load(&["train.txt", "test.txt"])?;
//! let spec = SampleSpec::default(); // seed 42, total 100, protocol targets
//! let sample = StratifiedSampler::new(spec).sample(&pool)?;
//!
//! for id in sample.ids() {
//!     println!("{}", id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: label types, protocol constants, and error handling
//! - [`config`]: target distributions and the sample spec
//! - [`pool`]: review pool loading and stratum bookkeeping
//! - [`sampling`]: largest-remainder rounding and the constrained draw
//! - [`artifact`]: the persisted sample and its audit manifest

#![warn(missing_docs)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Review pool module
pub mod pool;

// Stratified sampling module
pub mod sampling;

// Sample artifact module
pub mod artifact;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, EXPECTED_POOL_SIZE, FRACTION_TOLERANCE},
    error::{Result, SamplerError},
    types::{Aspect, Mention, PoolIndex, Review, ReviewId, Sentiment, StarRating},
};

// Re-export configuration functionality
pub use config::{
    distribution::{AspectTargets, MentionTargets, SentimentTargets, TargetDistribution},
    spec::{SampleSpec, SampleSpecBuilder},
};

// Re-export pool functionality
pub use pool::{PoolLoader, ReviewPool};

// Re-export sampling functionality
pub use sampling::{largest_remainder, StratifiedSampler};

// Re-export artifact functionality
pub use artifact::{manifest_path, write_artifact, RealizedCounts, SampleManifest, StratifiedSample};
