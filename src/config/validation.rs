//! Validation for sample specifications.
//!
//! All configuration problems are caught here, before any sampling begins.
//! Sum violations surface as `InvalidDistribution` with the offending sum;
//! range violations and a zero total surface as `Config`.

use crate::config::spec::SampleSpec;
use crate::core::constants::FRACTION_TOLERANCE;
use crate::core::error::{Result, SamplerError};

/// Validate a complete sample spec.
pub fn validate_spec(spec: &SampleSpec) -> Result<()> {
    if spec.total == 0 {
        return Err(SamplerError::config("sample total must be greater than 0"));
    }

    check_fractions("sentiment", &spec.distribution.sentiment.fractions())?;
    check_fractions("aspect", &spec.distribution.aspect.fractions())?;

    let implicit = spec.distribution.mention.implicit;
    if !(0.0..=1.0).contains(&implicit) {
        return Err(SamplerError::config(format!(
            "implicit fraction must be within [0, 1], got {}",
            implicit
        )));
    }

    Ok(())
}

/// Check that one dimension's fractions are in range and sum to 1.0.
fn check_fractions(dimension: &str, fractions: &[f64]) -> Result<()> {
    for &fraction in fractions {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(SamplerError::config(format!(
                "{} fraction must be within [0, 1], got {}",
                dimension, fraction
            )));
        }
    }

    let sum: f64 = fractions.iter().sum();
    if (sum - 1.0).abs() > FRACTION_TOLERANCE {
        return Err(SamplerError::invalid_distribution(dimension, sum));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::distribution::{SentimentTargets, TargetDistribution};

    #[test]
    fn test_valid_default() {
        assert!(validate_spec(&SampleSpec::default()).is_ok());
    }

    #[test]
    fn test_sum_below_one_rejected() {
        let mut spec = SampleSpec::default();
        spec.distribution.sentiment = SentimentTargets {
            negative: 0.60,
            neutral: 0.25,
            positive: 0.12,
        };
        let err = validate_spec(&spec).unwrap_err();
        match err {
            SamplerError::InvalidDistribution { dimension, sum } => {
                assert_eq!(dimension, "sentiment");
                assert!((sum - 0.97).abs() < 1e-9);
            }
            other => panic!("expected InvalidDistribution, got {:?}", other),
        }
    }

    #[test]
    fn test_aspect_sum_checked_independently() {
        let mut spec = SampleSpec::default();
        spec.distribution.aspect.durability = 0.10;
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::InvalidDistribution { ref dimension, .. } if dimension == "aspect"
        ));
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        let mut spec = SampleSpec::default();
        spec.distribution.sentiment.negative = -0.1;
        assert!(matches!(
            validate_spec(&spec).unwrap_err(),
            SamplerError::Config { .. }
        ));

        let mut spec = SampleSpec::default();
        spec.distribution.mention.implicit = 1.5;
        assert!(matches!(
            validate_spec(&spec).unwrap_err(),
            SamplerError::Config { .. }
        ));
    }

    #[test]
    fn test_tolerance_accepts_tiny_drift() {
        let mut spec = SampleSpec::default();
        spec.distribution = TargetDistribution {
            sentiment: SentimentTargets {
                negative: 0.6 + 1e-9,
                neutral: 0.25,
                positive: 0.15,
            },
            ..TargetDistribution::default()
        };
        assert!(validate_spec(&spec).is_ok());
    }
}
