//! Core infrastructure: types, constants, and error handling.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Result, SamplerError};
pub use types::{Aspect, Mention, PoolIndex, Review, ReviewId, Sentiment, StarRating};
