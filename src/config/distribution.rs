//! Target distribution configuration.
//!
//! The distribution is configuration fixed by the curation protocol, not
//! something derived from the pool. Fields are plain named fractions so the
//! structure maps directly onto a TOML file:
//!
//! ```toml
//! [sentiment]
//! negative = 0.60
//! neutral = 0.25
//! positive = 0.15
//!
//! [aspect]
//! fit_sizing = 0.20
//! shipping_packaging = 0.19
//! material_quality = 0.18
//! instructions_ux = 0.15
//! color_aesthetics = 0.15
//! comfort = 0.08
//! value_price = 0.03
//! durability = 0.02
//!
//! [mention]
//! implicit = 0.65
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::constants::*;
use crate::core::error::Result;

/// Target fractions per sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentTargets {
    /// Fraction of the sample with negative sentiment
    pub negative: f64,
    /// Fraction with neutral sentiment
    pub neutral: f64,
    /// Fraction with positive sentiment
    pub positive: f64,
}

impl SentimentTargets {
    /// Fractions in canonical sentiment order.
    pub fn fractions(&self) -> [f64; 3] {
        [self.negative, self.neutral, self.positive]
    }
}

impl Default for SentimentTargets {
    fn default() -> Self {
        let [negative, neutral, positive] = DEFAULT_SENTIMENT_FRACTIONS;
        SentimentTargets {
            negative,
            neutral,
            positive,
        }
    }
}

/// Target fractions per aspect category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectTargets {
    /// Fit/Sizing fraction
    pub fit_sizing: f64,
    /// Shipping/Packaging fraction
    pub shipping_packaging: f64,
    /// Material/Quality fraction
    pub material_quality: f64,
    /// Instructions/UX fraction
    pub instructions_ux: f64,
    /// Color/Aesthetics fraction
    pub color_aesthetics: f64,
    /// Comfort fraction
    pub comfort: f64,
    /// Value/Price fraction
    pub value_price: f64,
    /// Durability fraction
    pub durability: f64,
}

impl AspectTargets {
    /// Fractions in canonical aspect order.
    pub fn fractions(&self) -> [f64; 8] {
        [
            self.fit_sizing,
            self.shipping_packaging,
            self.material_quality,
            self.instructions_ux,
            self.color_aesthetics,
            self.comfort,
            self.value_price,
            self.durability,
        ]
    }
}

impl Default for AspectTargets {
    fn default() -> Self {
        let [fit_sizing, shipping_packaging, material_quality, instructions_ux, color_aesthetics, comfort, value_price, durability] =
            DEFAULT_ASPECT_FRACTIONS;
        AspectTargets {
            fit_sizing,
            shipping_packaging,
            material_quality,
            instructions_ux,
            color_aesthetics,
            comfort,
            value_price,
            durability,
        }
    }
}

/// Target fraction for the implicit/explicit mention split.
///
/// Only the implicit fraction is stored; the explicit fraction is its
/// complement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MentionTargets {
    /// Fraction of the sample with implicitly mentioned aspects
    pub implicit: f64,
}

impl MentionTargets {
    /// Fractions in canonical mention order: implicit, explicit.
    pub fn fractions(&self) -> [f64; 2] {
        [self.implicit, 1.0 - self.implicit]
    }
}

impl Default for MentionTargets {
    fn default() -> Self {
        MentionTargets {
            implicit: DEFAULT_IMPLICIT_FRACTION,
        }
    }
}

/// Complete target distribution over the three stratification dimensions.
///
/// Sentiment and aspect are enforced as independent marginal targets, not a
/// joint cross-tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetDistribution {
    /// Per-sentiment target fractions
    #[serde(default)]
    pub sentiment: SentimentTargets,
    /// Per-aspect target fractions
    #[serde(default)]
    pub aspect: AspectTargets,
    /// Implicit/explicit split target
    #[serde(default)]
    pub mention: MentionTargets,
}

impl TargetDistribution {
    /// Load a distribution from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let distribution: TargetDistribution = toml::from_str(&content)?;
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_matches_protocol() {
        let dist = TargetDistribution::default();
        assert_relative_eq!(dist.sentiment.negative, 0.60);
        assert_relative_eq!(dist.aspect.fit_sizing, 0.20);
        assert_relative_eq!(dist.mention.implicit, 0.65);
    }

    #[test]
    fn test_mention_fractions_complement() {
        let mention = MentionTargets { implicit: 0.65 };
        let [implicit, explicit] = mention.fractions();
        assert_relative_eq!(implicit + explicit, 1.0);
        assert_relative_eq!(explicit, 0.35);
    }

    #[test]
    fn test_toml_round_trip() {
        let dist = TargetDistribution::default();
        let encoded = toml::to_string(&dist).unwrap();
        let decoded: TargetDistribution = toml::from_str(&encoded).unwrap();
        assert_eq!(dist, decoded);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let decoded: TargetDistribution = toml::from_str(
            r#"
            [mention]
            implicit = 0.5
            "#,
        )
        .unwrap();
        assert_relative_eq!(decoded.mention.implicit, 0.5);
        assert_relative_eq!(decoded.sentiment.negative, 0.60);
    }
}
