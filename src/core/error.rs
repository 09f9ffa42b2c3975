//! Error handling and error types for the review sampler.
//!
//! The two domain failures (`InvalidDistribution`, `InsufficientPool`) carry
//! enough context for an operator to act on them directly: the offending
//! fraction sum, or the exhausted stratum and its shortfall. Everything else
//! is configuration or I/O plumbing.

use std::io;
use thiserror::Error;

/// Main error type for the review sampler.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// Target fractions for a distribution dimension do not sum to 1.0
    /// within tolerance. Raised before any sampling begins.
    #[error("Invalid target distribution: {dimension} fractions sum to {sum}, expected 1.0")]
    InvalidDistribution {
        /// Which dimension failed ("sentiment", "aspect", "mention")
        dimension: String,
        /// The offending sum
        sum: f64,
    },

    /// A stratum cannot meet its target count from the available pool.
    /// Not retried; the same pool yields the same failure.
    #[error("Insufficient pool for stratum '{stratum}': need {needed}, only {available} available")]
    InsufficientPool {
        /// Human-readable stratum name, e.g. "sentiment Positive"
        stratum: String,
        /// Target count for the stratum
        needed: usize,
        /// Reviews available in the pool for the stratum
        available: usize,
    },

    /// Configuration problems other than distribution sums
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Pool file loading and parsing errors
    #[error("Data loading error: {message}")]
    DataLoading {
        /// Description with file/line context
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// CSV parsing errors
    #[error("CSV parsing error: {source}")]
    Csv {
        /// Underlying CSV error
        #[from]
        source: csv::Error,
    },

    /// JSON serialization errors (sample manifest)
    #[error("JSON error: {source}")]
    Json {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// TOML deserialization errors (target distribution files)
    #[error("TOML error: {source}")]
    Toml {
        /// Underlying TOML error
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using SamplerError.
pub type Result<T> = std::result::Result<T, SamplerError>;

impl SamplerError {
    /// Create an invalid-distribution error for one dimension.
    pub fn invalid_distribution<S: Into<String>>(dimension: S, sum: f64) -> Self {
        SamplerError::InvalidDistribution {
            dimension: dimension.into(),
            sum,
        }
    }

    /// Create an insufficient-pool error naming the exhausted stratum.
    pub fn insufficient_pool<S: Into<String>>(stratum: S, needed: usize, available: usize) -> Self {
        SamplerError::InsufficientPool {
            stratum: stratum.into(),
            needed,
            available,
        }
    }

    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        SamplerError::Config {
            message: message.into(),
        }
    }

    /// Create a data loading error.
    pub fn data_loading<S: Into<String>>(message: S) -> Self {
        SamplerError::DataLoading {
            message: message.into(),
        }
    }

    /// Get error category for logging and exit-code mapping.
    pub fn category(&self) -> &'static str {
        match self {
            SamplerError::InvalidDistribution { .. } => "invalid_distribution",
            SamplerError::InsufficientPool { .. } => "insufficient_pool",
            SamplerError::Config { .. } => "config",
            SamplerError::DataLoading { .. } => "data_loading",
            SamplerError::Io { .. } => "io",
            SamplerError::Csv { .. } => "csv",
            SamplerError::Json { .. } => "json",
            SamplerError::Toml { .. } => "toml",
        }
    }
}
