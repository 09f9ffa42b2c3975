//! Sample artifact and audit manifest.
//!
//! The sample is a fixed, versioned artifact: once written it is never
//! regenerated silently. The manifest records everything an auditor needs
//! to verify the sample was produced honestly: seed, pool size, targets,
//! and realized counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::spec::SampleSpec;
use crate::core::error::{Result, SamplerError};
use crate::core::types::{Aspect, Mention, PoolIndex, ReviewId, Sentiment};
use crate::pool::ReviewPool;

/// Realized per-stratum counts of a drawn sample.
///
/// Keyed by display label so the manifest JSON is readable; `BTreeMap`
/// keeps the serialized form deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RealizedCounts {
    /// Selected reviews per sentiment class
    pub sentiment: BTreeMap<String, usize>,
    /// Selected reviews per aspect category
    pub aspect: BTreeMap<String, usize>,
    /// Selected reviews per mention flag
    pub mention: BTreeMap<String, usize>,
}

impl RealizedCounts {
    /// Tally the counts of a selection of pool indices.
    pub fn from_selection(pool: &ReviewPool, selection: &[PoolIndex]) -> Self {
        let mut counts = RealizedCounts::default();
        for sentiment in Sentiment::ALL {
            counts.sentiment.insert(sentiment.to_string(), 0);
        }
        for aspect in Aspect::ALL {
            counts.aspect.insert(aspect.to_string(), 0);
        }
        for mention in Mention::ALL {
            counts.mention.insert(mention.to_string(), 0);
        }

        for &index in selection {
            let review = &pool.reviews()[index];
            *counts
                .sentiment
                .entry(review.sentiment().to_string())
                .or_default() += 1;
            *counts.aspect.entry(review.aspect.to_string()).or_default() += 1;
            *counts.mention.entry(review.mention.to_string()).or_default() += 1;
        }
        counts
    }

    /// Count for one sentiment class.
    pub fn sentiment_count(&self, sentiment: Sentiment) -> usize {
        self.sentiment
            .get(&sentiment.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Count for one aspect category.
    pub fn aspect_count(&self, aspect: Aspect) -> usize {
        self.aspect.get(&aspect.to_string()).copied().unwrap_or(0)
    }

    /// Count for one mention flag.
    pub fn mention_count(&self, mention: Mention) -> usize {
        self.mention.get(&mention.to_string()).copied().unwrap_or(0)
    }

    /// Sentiment counts in canonical order.
    pub fn sentiment_counts(&self) -> [usize; 3] {
        [
            self.sentiment_count(Sentiment::Negative),
            self.sentiment_count(Sentiment::Neutral),
            self.sentiment_count(Sentiment::Positive),
        ]
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        let [negative, neutral, positive] = self.sentiment_counts();
        format!(
            "sentiment {}/{}/{}, implicit {} / explicit {}",
            negative,
            neutral,
            positive,
            self.mention_count(Mention::Implicit),
            self.mention_count(Mention::Explicit)
        )
    }
}

/// Ordered sequence of selected review identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StratifiedSample {
    ids: Vec<ReviewId>,
    realized: RealizedCounts,
}

impl StratifiedSample {
    /// Wrap a drawn selection.
    pub fn new(ids: Vec<ReviewId>, realized: RealizedCounts) -> Self {
        StratifiedSample { ids, realized }
    }

    /// Selected identifiers, in final (shuffled) order.
    pub fn ids(&self) -> &[ReviewId] {
        &self.ids
    }

    /// Number of selected reviews.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the sample is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Realized per-stratum counts.
    pub fn realized(&self) -> &RealizedCounts {
        &self.realized
    }
}

/// Audit metadata persisted alongside the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleManifest {
    /// Seed the generator was initialized with
    pub seed: u64,
    /// Size of the source pool the sample was drawn from
    pub pool_size: usize,
    /// Requested sample size
    pub total: usize,
    /// Target distribution used for the draw
    pub distribution: crate::config::distribution::TargetDistribution,
    /// Realized per-stratum counts
    pub realized: RealizedCounts,
    /// When the sample was generated (UTC)
    pub created_at: DateTime<Utc>,
}

impl SampleManifest {
    /// Build the manifest for a drawn sample.
    pub fn new(spec: &SampleSpec, pool_size: usize, sample: &StratifiedSample) -> Self {
        SampleManifest {
            seed: spec.seed,
            pool_size,
            total: spec.total,
            distribution: spec.distribution,
            realized: sample.realized().clone(),
            created_at: Utc::now(),
        }
    }

    /// Read a manifest back from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let manifest: SampleManifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }
}

/// Path of the manifest written next to a sample artifact.
pub fn manifest_path(sample_path: &Path) -> PathBuf {
    let mut os = sample_path.as_os_str().to_owned();
    os.push(".manifest.json");
    PathBuf::from(os)
}

/// Write the sample (one identifier per line) and its manifest.
///
/// Regeneration is an explicit, auditable action: an existing artifact is
/// never replaced unless `force` is set.
pub fn write_artifact(
    sample: &StratifiedSample,
    manifest: &SampleManifest,
    path: &Path,
    force: bool,
) -> Result<()> {
    let manifest_file = manifest_path(path);
    if !force && (path.exists() || manifest_file.exists()) {
        return Err(SamplerError::config(format!(
            "sample artifact already exists at {}; pass --force to regenerate",
            path.display()
        )));
    }

    let mut lines = String::with_capacity(sample.len() * 8);
    for id in sample.ids() {
        lines.push_str(id.as_str());
        lines.push('\n');
    }
    std::fs::write(path, lines)?;

    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_file, json)?;

    log::info!(
        "wrote {} identifiers to {} (manifest: {})",
        sample.len(),
        path.display(),
        manifest_file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Review, StarRating};
    use tempfile::TempDir;

    fn sample_fixture() -> (SampleSpec, StratifiedSample) {
        let spec = SampleSpec::default();
        let pool = ReviewPool::from_reviews(vec![
            Review {
                id: ReviewId::new("R1"),
                text: "x".into(),
                stars: StarRating::new(1).unwrap(),
                aspect: Aspect::Comfort,
                mention: Mention::Implicit,
            },
            Review {
                id: ReviewId::new("R2"),
                text: "y".into(),
                stars: StarRating::new(4).unwrap(),
                aspect: Aspect::Durability,
                mention: Mention::Explicit,
            },
        ])
        .unwrap();
        let realized = RealizedCounts::from_selection(&pool, &[0, 1]);
        let sample = StratifiedSample::new(
            vec![ReviewId::new("R1"), ReviewId::new("R2")],
            realized,
        );
        (spec, sample)
    }

    #[test]
    fn test_realized_counts_tally() {
        let (_, sample) = sample_fixture();
        let realized = sample.realized();
        assert_eq!(realized.sentiment_count(Sentiment::Negative), 1);
        assert_eq!(realized.sentiment_count(Sentiment::Positive), 1);
        assert_eq!(realized.aspect_count(Aspect::Comfort), 1);
        assert_eq!(realized.mention_count(Mention::Explicit), 1);
        // Untouched strata report zero, not absence.
        assert_eq!(realized.aspect_count(Aspect::FitSizing), 0);
    }

    #[test]
    fn test_manifest_json_round_trip() {
        let (spec, sample) = sample_fixture();
        let manifest = SampleManifest::new(&spec, 1031, &sample);

        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let decoded: SampleManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, decoded);
        assert_eq!(decoded.seed, 42);
        assert_eq!(decoded.pool_size, 1031);
    }

    #[test]
    fn test_write_artifact_and_read_back() {
        let (spec, sample) = sample_fixture();
        let manifest = SampleManifest::new(&spec, 2, &sample);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");

        write_artifact(&sample, &manifest, &path, false).unwrap();

        let ids = std::fs::read_to_string(&path).unwrap();
        assert_eq!(ids, "R1\nR2\n");

        let decoded = SampleManifest::from_file(manifest_path(&path)).unwrap();
        assert_eq!(decoded, manifest);
    }

    #[test]
    fn test_existing_artifact_not_overwritten() {
        let (spec, sample) = sample_fixture();
        let manifest = SampleManifest::new(&spec, 2, &sample);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");

        write_artifact(&sample, &manifest, &path, false).unwrap();
        let err = write_artifact(&sample, &manifest, &path, false).unwrap_err();
        assert!(matches!(err, SamplerError::Config { .. }));

        // Explicit regeneration is allowed.
        write_artifact(&sample, &manifest, &path, true).unwrap();
    }
}
