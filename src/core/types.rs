//! Core data types for the review sampler.
//!
//! This module defines the closed label sets used by the blind-evaluation
//! protocol and the immutable `Review` record the pool is built from.
//! Declaration order of the enums is significant: it is the canonical
//! tie-break order for largest-remainder rounding and cell iteration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{Result, SamplerError};

/// Index into the review pool.
pub type PoolIndex = usize;

/// Review identifier, e.g. `RRE_001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub String);

impl ReviewId {
    /// Create a review identifier from any string-like value.
    pub fn new<S: Into<String>>(id: S) -> Self {
        ReviewId(id.into())
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReviewId {
    fn from(s: &str) -> Self {
        ReviewId(s.to_string())
    }
}

/// Validated 1-5 star rating.
///
/// The range check also runs on deserialization, so a rating coming out of
/// a manifest or config file is as trustworthy as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// Create a rating, rejecting values outside 1-5.
    pub fn new(stars: u8) -> Result<Self> {
        if !(1..=5).contains(&stars) {
            return Err(SamplerError::config(format!(
                "star rating must be between 1 and 5, got {}",
                stars
            )));
        }
        Ok(StarRating(stars))
    }

    /// Raw star value.
    pub fn stars(&self) -> u8 {
        self.0
    }

    /// Sentiment class implied by the rating.
    ///
    /// Mapping fixed by the protocol: 1-2 stars negative, 3 neutral,
    /// 4-5 positive.
    pub fn sentiment(&self) -> Sentiment {
        match self.0 {
            1 | 2 => Sentiment::Negative,
            3 => Sentiment::Neutral,
            _ => Sentiment::Positive,
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = SamplerError;

    fn try_from(stars: u8) -> Result<Self> {
        StarRating::new(stars)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> u8 {
        rating.0
    }
}

/// Sentiment class derived from the star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    /// 1-2 stars
    Negative,
    /// 3 stars
    Neutral,
    /// 4-5 stars
    Positive,
}

impl Sentiment {
    /// All classes in canonical (declaration) order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Position in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Positive => write!(f, "Positive"),
        }
    }
}

/// Aspect categories annotated on the pool.
///
/// Closed set; declaration order matches the protocol's documented target
/// listing and is the rounding tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Aspect {
    /// Fit and sizing complaints or praise ("runs small")
    FitSizing,
    /// Shipping speed and packaging condition
    ShippingPackaging,
    /// Material and build quality
    MaterialQuality,
    /// Instructions and usage experience
    InstructionsUx,
    /// Color and looks
    ColorAesthetics,
    /// Comfort in use
    Comfort,
    /// Price and value for money
    ValuePrice,
    /// Longevity and wear
    Durability,
}

impl Aspect {
    /// All categories in canonical (declaration) order.
    pub const ALL: [Aspect; 8] = [
        Aspect::FitSizing,
        Aspect::ShippingPackaging,
        Aspect::MaterialQuality,
        Aspect::InstructionsUx,
        Aspect::ColorAesthetics,
        Aspect::Comfort,
        Aspect::ValuePrice,
        Aspect::Durability,
    ];

    /// Position in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::FitSizing => write!(f, "Fit/Sizing"),
            Aspect::ShippingPackaging => write!(f, "Shipping/Packaging"),
            Aspect::MaterialQuality => write!(f, "Material/Quality"),
            Aspect::InstructionsUx => write!(f, "Instructions/UX"),
            Aspect::ColorAesthetics => write!(f, "Color/Aesthetics"),
            Aspect::Comfort => write!(f, "Comfort"),
            Aspect::ValuePrice => write!(f, "Value/Price"),
            Aspect::Durability => write!(f, "Durability"),
        }
    }
}

impl FromStr for Aspect {
    type Err = SamplerError;

    /// Parse an aspect label, normalizing the spelling variants present in
    /// the source annotations (spacing, case, `Sizing/Fit`, `Style`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fit/sizing" | "sizing/fit" => Ok(Aspect::FitSizing),
            "shipping/packaging" => Ok(Aspect::ShippingPackaging),
            "material/quality" => Ok(Aspect::MaterialQuality),
            "instructions/ux" | "instruction/ux" => Ok(Aspect::InstructionsUx),
            "color/aesthetics" | "style" => Ok(Aspect::ColorAesthetics),
            "comfort" => Ok(Aspect::Comfort),
            "value/price" => Ok(Aspect::ValuePrice),
            "durability" => Ok(Aspect::Durability),
            _ => Err(SamplerError::data_loading(format!(
                "unknown aspect label: '{}'",
                s
            ))),
        }
    }
}

/// Whether the aspect is named directly in the text or inferred from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mention {
    /// Aspect inferred from context ("runs small" implying Fit/Sizing)
    Implicit,
    /// Aspect named directly in the text
    Explicit,
}

impl Mention {
    /// Both flags in canonical (declaration) order.
    pub const ALL: [Mention; 2] = [Mention::Implicit, Mention::Explicit];

    /// Position in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mention::Implicit => write!(f, "Implicit"),
            Mention::Explicit => write!(f, "Explicit"),
        }
    }
}

impl FromStr for Mention {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "implicit" => Ok(Mention::Implicit),
            "explicit" => Ok(Mention::Explicit),
            _ => Err(SamplerError::data_loading(format!(
                "mention flag must be 'implicit' or 'explicit', got '{}'",
                s
            ))),
        }
    }
}

/// A single labeled review. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Identifier, unique within the pool
    pub id: ReviewId,
    /// Raw review text
    pub text: String,
    /// 1-5 star rating
    pub stars: StarRating,
    /// Annotated aspect category
    pub aspect: Aspect,
    /// Implicit/explicit aspect mention flag
    pub mention: Mention,
}

impl Review {
    /// Sentiment class derived from the star rating.
    pub fn sentiment(&self) -> Sentiment {
        self.stars.sentiment()
    }

    /// Stratification cell this review belongs to.
    pub fn cell(&self) -> (Sentiment, Aspect, Mention) {
        (self.sentiment(), self.aspect, self.mention)
    }
}
