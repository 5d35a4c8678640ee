//! Historical price loader.
//!
//! The input is a CSV file whose first record is a comma-separated list of
//! minute-end prices. Only the first record is read; anything after it is
//! ignored.

use std::fs::File;
use std::path::{Path, PathBuf};

use pricer_core::types::HistoricalReturns;
use tracing::{debug, info};

use crate::error::LoaderError;

/// Loader for the historical price series.
#[derive(Clone, Debug)]
pub struct HistoricalDataLoader {
    path: PathBuf,
}

impl HistoricalDataLoader {
    /// Creates a loader reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the input path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the first record of the file.
    ///
    /// # Errors
    ///
    /// - [`LoaderError::Open`] if the file cannot be opened
    /// - [`LoaderError::Read`] if the file cannot be read as CSV
    /// - [`LoaderError::Empty`] if the file holds no record
    /// - [`LoaderError::Data`] if a field is not a finite float
    pub fn load(&self) -> Result<HistoricalReturns, LoaderError> {
        let file = File::open(&self.path).map_err(|source| LoaderError::Open {
            path: self.path.clone(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut record = csv::StringRecord::new();
        let found = reader
            .read_record(&mut record)
            .map_err(|source| LoaderError::Read {
                path: self.path.clone(),
                source,
            })?;
        if !found {
            return Err(LoaderError::Empty {
                path: self.path.clone(),
            });
        }
        debug!(path = %self.path.display(), fields = record.len(), "Read historical record");

        let history =
            HistoricalReturns::parse_fields(record.iter()).map_err(|source| LoaderError::Data {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            values = history.len(),
            "Loaded historical prices"
        );
        Ok(history)
    }

    /// Reads the series and checks it holds exactly `expected_len` values.
    ///
    /// # Errors
    ///
    /// As [`HistoricalDataLoader::load`], plus [`LoaderError::Data`] with a
    /// length mismatch.
    pub fn load_expecting(&self, expected_len: usize) -> Result<HistoricalReturns, LoaderError> {
        let history = self.load()?;
        history
            .expect_len(expected_len)
            .map_err(|source| LoaderError::Data {
                path: self.path.clone(),
                source,
            })?;
        Ok(history)
    }
}
