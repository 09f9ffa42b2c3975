//! Delimited-file loader for the review pool.
//!
//! The pool is conventionally split across `train.txt` and `test.txt`,
//! tab-separated with a header row; `.csv` files are comma-separated.
//! Each record carries: id, stars, aspect, mention, text.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::core::error::{Result, SamplerError};
use crate::core::types::{Review, ReviewId, StarRating};
use crate::pool::ReviewPool;

/// Columns expected in each pool record.
const EXPECTED_FIELDS: usize = 5;

/// Loader for delimited review pool files.
#[derive(Debug, Clone)]
pub struct PoolLoader {
    delimiter: Option<u8>,
    has_header: bool,
}

impl Default for PoolLoader {
    fn default() -> Self {
        PoolLoader {
            delimiter: None,
            has_header: true,
        }
    }
}

impl PoolLoader {
    /// Create a loader with default settings (header row, delimiter from
    /// file extension).
    pub fn new() -> Self {
        PoolLoader::default()
    }

    /// Force a delimiter instead of inferring it from the extension.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter as u8);
        self
    }

    /// Set whether files carry a header row.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Load one or more pool files into a single pool, preserving file and
    /// record order.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<ReviewPool> {
        if paths.is_empty() {
            return Err(SamplerError::config("no pool files given"));
        }

        let mut reviews = Vec::new();
        for path in paths {
            self.load_file(path.as_ref(), &mut reviews)?;
        }

        log::info!("loaded pool of {} reviews from {} file(s)", reviews.len(), paths.len());
        ReviewPool::from_reviews(reviews)
    }

    fn load_file(&self, path: &Path, reviews: &mut Vec<Review>) -> Result<()> {
        if !path.is_file() {
            return Err(SamplerError::data_loading(format!(
                "pool file does not exist: {}",
                path.display()
            )));
        }

        let delimiter = self.delimiter.unwrap_or_else(|| infer_delimiter(path));
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.has_header)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(file);

        let header_offset = if self.has_header { 2 } else { 1 };
        let before = reviews.len();

        for (record_index, result) in reader.records().enumerate() {
            let line = record_index + header_offset;
            let record = result.map_err(|e| {
                SamplerError::data_loading(format!(
                    "{}:{}: malformed record: {}",
                    path.display(),
                    line,
                    e
                ))
            })?;

            if record.len() < EXPECTED_FIELDS {
                return Err(SamplerError::data_loading(format!(
                    "{}:{}: expected {} fields (id, stars, aspect, mention, text), got {}",
                    path.display(),
                    line,
                    EXPECTED_FIELDS,
                    record.len()
                )));
            }

            reviews.push(parse_record(&record, path, line)?);
        }

        log::debug!(
            "read {} reviews from {}",
            reviews.len() - before,
            path.display()
        );
        Ok(())
    }
}

fn infer_delimiter(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => b',',
        _ => b'\t',
    }
}

fn parse_record(record: &csv::StringRecord, path: &Path, line: usize) -> Result<Review> {
    let context = |field: &str, value: &str, reason: &str| {
        SamplerError::data_loading(format!(
            "{}:{}: invalid {} '{}': {}",
            path.display(),
            line,
            field,
            value,
            reason
        ))
    };

    let id = record[0].trim();
    if id.is_empty() {
        return Err(context("id", "", "identifier must not be empty"));
    }

    let stars_raw = record[1].trim();
    let stars = stars_raw
        .parse::<u8>()
        .ok()
        .and_then(|v| StarRating::new(v).ok())
        .ok_or_else(|| context("star rating", stars_raw, "expected an integer from 1 to 5"))?;

    let aspect = record[2]
        .parse()
        .map_err(|_| context("aspect label", &record[2], "not in the closed aspect set"))?;

    let mention = record[3]
        .parse()
        .map_err(|_| context("mention flag", &record[3], "expected 'implicit' or 'explicit'"))?;

    Ok(Review {
        id: ReviewId::new(id),
        text: record[4].to_string(),
        stars,
        aspect,
        mention,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Aspect, Mention, Sentiment};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_tab_separated() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "train.txt",
            "id\tstars\taspect\tmention\ttext\n\
             RRE_001\t2\tFit/Sizing\timplicit\truns small, had to return\n\
             RRE_002\t5\tComfort\texplicit\tvery comfortable bands\n",
        );

        let pool = PoolLoader::new().load(&[path]).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).unwrap().sentiment(), Sentiment::Negative);
        assert_eq!(pool.get(0).unwrap().aspect, Aspect::FitSizing);
        assert_eq!(pool.get(1).unwrap().mention, Mention::Explicit);
    }

    #[test]
    fn test_load_csv_with_quoted_text() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pool.csv",
            "id,stars,aspect,mention,text\n\
             RRE_003,3,Material/Quality,explicit,\"thin material, but ok\"\n",
        );

        let pool = PoolLoader::new().load(&[path]).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0).unwrap().text, "thin material, but ok");
    }

    #[test]
    fn test_multiple_files_preserve_order() {
        let dir = TempDir::new().unwrap();
        let train = write_file(
            &dir,
            "train.txt",
            "id\tstars\taspect\tmention\ttext\nA\t1\tComfort\timplicit\tx\n",
        );
        let test = write_file(
            &dir,
            "test.txt",
            "id\tstars\taspect\tmention\ttext\nB\t4\tComfort\timplicit\ty\n",
        );

        let pool = PoolLoader::new().load(&[train, test]).unwrap();
        assert_eq!(pool.get(0).unwrap().id.as_str(), "A");
        assert_eq!(pool.get(1).unwrap().id.as_str(), "B");
    }

    #[test]
    fn test_bad_star_rating_has_line_context() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "train.txt",
            "id\tstars\taspect\tmention\ttext\nA\t9\tComfort\timplicit\tx\n",
        );

        let err = PoolLoader::new().load(&[path]).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains(":2:"), "missing line context: {}", message);
        assert!(message.contains("star rating"));
    }

    #[test]
    fn test_unknown_aspect_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "train.txt",
            "id\tstars\taspect\tmention\ttext\nA\t2\tWarranty\timplicit\tx\n",
        );

        let err = PoolLoader::new().load(&[path]).unwrap_err();
        assert!(format!("{}", err).contains("aspect label"));
    }

    #[test]
    fn test_duplicate_ids_across_files_rejected() {
        let dir = TempDir::new().unwrap();
        let train = write_file(
            &dir,
            "train.txt",
            "id\tstars\taspect\tmention\ttext\nA\t1\tComfort\timplicit\tx\n",
        );
        let test = write_file(
            &dir,
            "test.txt",
            "id\tstars\taspect\tmention\ttext\nA\t4\tComfort\timplicit\ty\n",
        );

        assert!(PoolLoader::new().load(&[train, test]).is_err());
    }

    #[test]
    fn test_headerless_with_forced_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pool.dat", "A|2|Comfort|implicit|x\n");

        let pool = PoolLoader::new()
            .with_header(false)
            .with_delimiter('|')
            .load(&[path])
            .unwrap();
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = PoolLoader::new()
            .load(&[Path::new("/nonexistent/pool.txt")])
            .unwrap_err();
        assert!(matches!(err, SamplerError::DataLoading { .. }));
    }
}
