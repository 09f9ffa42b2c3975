//! Review pool management.
//!
//! The pool is the read-only input to sampling: an ordered collection of
//! labeled reviews with unique identifiers. Pool order is part of the
//! determinism contract, so the collection preserves load order exactly.

pub mod loader;

pub use loader::PoolLoader;

use std::collections::HashSet;

use crate::core::error::{Result, SamplerError};
use crate::core::types::{Aspect, Mention, PoolIndex, Review, Sentiment};

/// Ordered, read-only collection of labeled reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPool {
    reviews: Vec<Review>,
}

impl ReviewPool {
    /// Build a pool from loaded reviews, rejecting duplicate identifiers.
    pub fn from_reviews(reviews: Vec<Review>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(reviews.len());
        for review in &reviews {
            if !seen.insert(review.id.clone()) {
                return Err(SamplerError::config(format!(
                    "duplicate review id in pool: {}",
                    review.id
                )));
            }
        }
        Ok(ReviewPool { reviews })
    }

    /// Number of reviews in the pool.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// All reviews in load order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Review at a pool index.
    pub fn get(&self, index: PoolIndex) -> Option<&Review> {
        self.reviews.get(index)
    }

    /// Number of reviews in a sentiment class.
    pub fn count_sentiment(&self, sentiment: Sentiment) -> usize {
        self.reviews
            .iter()
            .filter(|r| r.sentiment() == sentiment)
            .count()
    }

    /// Number of reviews with an aspect category.
    pub fn count_aspect(&self, aspect: Aspect) -> usize {
        self.reviews.iter().filter(|r| r.aspect == aspect).count()
    }

    /// Number of reviews with a mention flag.
    pub fn count_mention(&self, mention: Mention) -> usize {
        self.reviews.iter().filter(|r| r.mention == mention).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ReviewId, StarRating};

    fn review(id: &str, stars: u8, aspect: Aspect, mention: Mention) -> Review {
        Review {
            id: ReviewId::new(id),
            text: format!("review {}", id),
            stars: StarRating::new(stars).unwrap(),
            aspect,
            mention,
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let reviews = vec![
            review("R1", 1, Aspect::Comfort, Mention::Implicit),
            review("R1", 4, Aspect::Durability, Mention::Explicit),
        ];
        let err = ReviewPool::from_reviews(reviews).unwrap_err();
        assert!(matches!(err, SamplerError::Config { .. }));
        assert!(format!("{}", err).contains("R1"));
    }

    #[test]
    fn test_counts() {
        let pool = ReviewPool::from_reviews(vec![
            review("R1", 1, Aspect::Comfort, Mention::Implicit),
            review("R2", 2, Aspect::Comfort, Mention::Explicit),
            review("R3", 5, Aspect::Durability, Mention::Implicit),
        ])
        .unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.count_sentiment(Sentiment::Negative), 2);
        assert_eq!(pool.count_sentiment(Sentiment::Neutral), 0);
        assert_eq!(pool.count_aspect(Aspect::Comfort), 2);
        assert_eq!(pool.count_mention(Mention::Implicit), 2);
    }

    #[test]
    fn test_load_order_preserved() {
        let reviews = vec![
            review("R2", 3, Aspect::Comfort, Mention::Implicit),
            review("R1", 3, Aspect::Comfort, Mention::Implicit),
        ];
        let pool = ReviewPool::from_reviews(reviews.clone()).unwrap();
        assert_eq!(pool.reviews(), &reviews[..]);
    }
}
