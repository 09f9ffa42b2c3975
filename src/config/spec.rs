//! Sample specification: total size, seed, and target distribution.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::distribution::TargetDistribution;
use crate::config::validation::validate_spec;
use crate::core::constants::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use crate::core::error::Result;

/// Full specification of one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSpec {
    /// Total desired sample size
    #[serde(default = "default_total")]
    pub total: usize,
    /// Random seed for the deterministic generator
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Target distribution over sentiment, aspect, and mention
    #[serde(default)]
    pub distribution: TargetDistribution,
}

fn default_total() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for SampleSpec {
    fn default() -> Self {
        SampleSpec {
            total: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            distribution: TargetDistribution::default(),
        }
    }
}

impl SampleSpec {
    /// Start building a spec from the protocol defaults.
    pub fn builder() -> SampleSpecBuilder {
        SampleSpecBuilder::new()
    }

    /// Load a spec from a TOML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let spec: SampleSpec = toml::from_str(&content)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Validate the spec before sampling.
    ///
    /// Checks that both fraction mappings sum to 1.0 within tolerance and
    /// that all fractions and the total are in range.
    pub fn validate(&self) -> Result<()> {
        validate_spec(self)
    }
}

/// Builder for [`SampleSpec`].
#[derive(Debug, Clone, Default)]
pub struct SampleSpecBuilder {
    spec: SampleSpec,
}

impl SampleSpecBuilder {
    /// Create a builder seeded with the protocol defaults.
    pub fn new() -> Self {
        SampleSpecBuilder {
            spec: SampleSpec::default(),
        }
    }

    /// Set the total sample size.
    pub fn total(mut self, total: usize) -> Self {
        self.spec.total = total;
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.spec.seed = seed;
        self
    }

    /// Set the target distribution.
    pub fn distribution(mut self, distribution: TargetDistribution) -> Self {
        self.spec.distribution = distribution;
        self
    }

    /// Validate and return the spec.
    pub fn build(self) -> Result<SampleSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = SampleSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.total, 100);
        assert_eq!(spec.seed, 42);
    }

    #[test]
    fn test_builder() {
        let spec = SampleSpec::builder().total(50).seed(7).build().unwrap();
        assert_eq!(spec.total, 50);
        assert_eq!(spec.seed, 7);
    }

    #[test]
    fn test_builder_rejects_zero_total() {
        let result = SampleSpec::builder().total(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_spec_toml_defaults() {
        let spec: SampleSpec = toml::from_str("").unwrap();
        assert_eq!(spec, SampleSpec::default());
    }
}
