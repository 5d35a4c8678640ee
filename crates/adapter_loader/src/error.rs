//! Error types for file adapters.

use std::path::PathBuf;

use pricer_core::types::DataError;
use thiserror::Error;

/// Adapter error type.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The input file could not be opened.
    #[error("Cannot open {}: {}", .path.display(), .source)]
    Open {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input file could not be read.
    #[error("Cannot read from {}: {}", .path.display(), .source)]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// The input file holds no records.
    #[error("No historical data in {}", .path.display())]
    Empty {
        /// Input path
        path: PathBuf,
    },

    /// The first record is not a valid historical series.
    #[error("Invalid historical data in {}: {}", .path.display(), .source)]
    Data {
        /// Input path
        path: PathBuf,
        /// Underlying data error
        source: DataError,
    },

    /// The output file could not be created.
    #[error("Couldn't open {}: {}", .path.display(), .source)]
    Create {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing a record failed.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Flushing buffered output failed.
    #[error("Failed to flush {}: {}", .path.display(), .source)]
    Flush {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl LoaderError {
    /// Returns the path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Empty { path }
            | Self::Data { path, .. }
            | Self::Create { path, .. }
            | Self::Write { path, .. }
            | Self::Flush { path, .. } => path,
        }
    }
}
