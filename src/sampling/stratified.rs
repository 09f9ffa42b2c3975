//! Deterministic stratified sampling over the review pool.
//!
//! The sampler enforces three marginal targets (sentiment, aspect,
//! implicit/explicit mention) over a single draw of `total` reviews.
//! All targets are hard: a constrained pass draws from joint cells in
//! scarcest-first order so rare combinations are consumed before common
//! ones can starve them, and if the pool cannot cover every target the
//! draw fails rather than returning an off-target sample.
//!
//! Reproducibility contract: the same pool (same reviews, same order) and
//! the same spec produce byte-identical output. One generator is seeded
//! fresh from `spec.seed` on every call, and every randomized step (cell
//! shuffles, the final shuffle) happens in a fixed order.

use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::artifact::{RealizedCounts, StratifiedSample};
use crate::config::spec::SampleSpec;
use crate::core::error::{Result, SamplerError};
use crate::core::types::{Aspect, Mention, PoolIndex, Sentiment};
use crate::pool::ReviewPool;
use crate::sampling::rounding::largest_remainder;

/// One joint stratification cell and the pool indices that fall into it.
#[derive(Debug)]
struct Cell {
    sentiment: Sentiment,
    aspect: Aspect,
    mention: Mention,
    members: Vec<PoolIndex>,
}

/// Stratified sampler for a fixed spec.
#[derive(Debug, Clone)]
pub struct StratifiedSampler {
    spec: SampleSpec,
}

impl StratifiedSampler {
    /// Create a sampler for the given spec.
    pub fn new(spec: SampleSpec) -> Self {
        StratifiedSampler { spec }
    }

    /// The spec this sampler draws with.
    pub fn spec(&self) -> &SampleSpec {
        &self.spec
    }

    /// Draw the stratified sample from the pool.
    ///
    /// Pure given its inputs: the pool is not mutated and no state survives
    /// between calls.
    pub fn sample(&self, pool: &ReviewPool) -> Result<StratifiedSample> {
        self.spec.validate()?;

        let total = self.spec.total;
        let distribution = &self.spec.distribution;
        let sentiment_targets = largest_remainder(total, &distribution.sentiment.fractions());
        let aspect_targets = largest_remainder(total, &distribution.aspect.fractions());
        let mention_targets = largest_remainder(total, &distribution.mention.fractions());

        check_marginal_availability(pool, &sentiment_targets, &aspect_targets, &mention_targets)?;

        log::info!(
            "sampling {} of {} reviews (seed {}): sentiment targets {:?}, aspect targets {:?}, mention targets {:?}",
            total,
            pool.len(),
            self.spec.seed,
            sentiment_targets,
            aspect_targets,
            mention_targets
        );

        // Fresh generator per call; part of the reproducibility contract.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.spec.seed);

        let mut cells = build_cells(pool);
        for cell in &mut cells {
            cell.members.shuffle(&mut rng);
        }

        let mut remaining_sentiment = sentiment_targets.clone();
        let mut remaining_aspect = aspect_targets.clone();
        let mut remaining_mention = mention_targets.clone();
        let mut selected: Vec<PoolIndex> = Vec::with_capacity(total);

        // Constrained pass: one draw at a time from the scarcest cell whose
        // sentiment, aspect, and mention targets all still have demand.
        // Ties resolve in canonical cell order.
        while selected.len() < total {
            let mut best: Option<usize> = None;
            for (slot, cell) in cells.iter().enumerate() {
                if cell.members.is_empty() {
                    continue;
                }
                if remaining_sentiment[cell.sentiment.index()] == 0
                    || remaining_aspect[cell.aspect.index()] == 0
                    || remaining_mention[cell.mention.index()] == 0
                {
                    continue;
                }
                match best {
                    None => best = Some(slot),
                    Some(b) if cell.members.len() < cells[b].members.len() => best = Some(slot),
                    _ => {}
                }
            }

            let Some(slot) = best else { break };
            // Cells were shuffled once up front, so popping is a uniform
            // draw without replacement.
            let Some(index) = cells[slot].members.pop() else {
                break;
            };
            remaining_sentiment[cells[slot].sentiment.index()] -= 1;
            remaining_aspect[cells[slot].aspect.index()] -= 1;
            remaining_mention[cells[slot].mention.index()] -= 1;
            selected.push(index);
        }

        // A stall with demand left means the marginals conflict at the joint
        // level (each marginal alone is satisfiable, pre-checked above). No
        // partial or off-target sample is ever returned.
        if let Some((stratum, needed, available)) = joint_shortfall(
            &cells,
            &remaining_sentiment,
            &remaining_aspect,
            &remaining_mention,
        ) {
            return Err(SamplerError::insufficient_pool(stratum, needed, available));
        }

        // Final shuffle so the output order is reproducible but not grouped
        // by class.
        selected.shuffle(&mut rng);

        let ids = selected
            .iter()
            .map(|&index| pool.reviews()[index].id.clone())
            .collect();
        let realized = RealizedCounts::from_selection(pool, &selected);

        log::info!("realized counts: {}", realized.summary());
        Ok(StratifiedSample::new(ids, realized))
    }
}

/// Locate the first marginal target still unmet after a stalled constrained
/// pass, in canonical order (aspects, then mentions). Availability counts
/// the unselected reviews jointly eligible for that stratum, i.e. those in
/// cells whose other two dimensions still have demand.
fn joint_shortfall(
    cells: &[Cell],
    remaining_sentiment: &[usize],
    remaining_aspect: &[usize],
    remaining_mention: &[usize],
) -> Option<(String, usize, usize)> {
    for (aspect, &needed) in Aspect::ALL.iter().zip(remaining_aspect) {
        if needed == 0 {
            continue;
        }
        let available = cells
            .iter()
            .filter(|cell| {
                cell.aspect == *aspect
                    && remaining_sentiment[cell.sentiment.index()] > 0
                    && remaining_mention[cell.mention.index()] > 0
            })
            .map(|cell| cell.members.len())
            .sum::<usize>();
        return Some((format!("aspect {}", aspect), needed, available));
    }

    for (mention, &needed) in Mention::ALL.iter().zip(remaining_mention) {
        if needed == 0 {
            continue;
        }
        let available = cells
            .iter()
            .filter(|cell| {
                cell.mention == *mention
                    && remaining_sentiment[cell.sentiment.index()] > 0
                    && remaining_aspect[cell.aspect.index()] > 0
            })
            .map(|cell| cell.members.len())
            .sum::<usize>();
        return Some((format!("mention {}", mention), needed, available));
    }

    None
}

/// Partition the pool into joint cells in canonical cell order.
fn build_cells(pool: &ReviewPool) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(Sentiment::ALL.len() * Aspect::ALL.len() * Mention::ALL.len());
    for sentiment in Sentiment::ALL {
        for aspect in Aspect::ALL {
            for mention in Mention::ALL {
                cells.push(Cell {
                    sentiment,
                    aspect,
                    mention,
                    members: Vec::new(),
                });
            }
        }
    }

    for (index, review) in pool.reviews().iter().enumerate() {
        let slot = (review.sentiment().index() * Aspect::ALL.len() + review.aspect.index())
            * Mention::ALL.len()
            + review.mention.index();
        cells[slot].members.push(index);
    }

    cells
}

/// Fail early if any marginal target exceeds what the pool holds.
fn check_marginal_availability(
    pool: &ReviewPool,
    sentiment_targets: &[usize],
    aspect_targets: &[usize],
    mention_targets: &[usize],
) -> Result<()> {
    for (sentiment, &needed) in Sentiment::ALL.iter().zip(sentiment_targets) {
        let available = pool.count_sentiment(*sentiment);
        if available < needed {
            return Err(SamplerError::insufficient_pool(
                format!("sentiment {}", sentiment),
                needed,
                available,
            ));
        }
    }

    for (aspect, &needed) in Aspect::ALL.iter().zip(aspect_targets) {
        let available = pool.count_aspect(*aspect);
        if available < needed {
            return Err(SamplerError::insufficient_pool(
                format!("aspect {}", aspect),
                needed,
                available,
            ));
        }
    }

    for (mention, &needed) in Mention::ALL.iter().zip(mention_targets) {
        let available = pool.count_mention(*mention);
        if available < needed {
            return Err(SamplerError::insufficient_pool(
                format!("mention {}", mention),
                needed,
                available,
            ));
        }
    }

    Ok(())
}
