//! Configuration management: target distributions and sample specs.

pub mod distribution;
pub mod spec;
pub mod validation;

pub use distribution::{AspectTargets, MentionTargets, SentimentTargets, TargetDistribution};
pub use spec::{SampleSpec, SampleSpecBuilder};
