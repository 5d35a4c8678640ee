//! Forecast output writer.
//!
//! Writes a trajectory as a single-column file: exactly one price per line,
//! in chronological order, no header.

use std::fs::File;
use std::path::{Path, PathBuf};

use pricer_core::types::Trajectory;
use tracing::info;

use crate::error::LoaderError;

/// Writer for the final forecast trajectory.
///
/// The destination is opened (and truncated) by [`TrajectoryWriter::create`],
/// so callers can validate it before running a long simulation.
pub struct TrajectoryWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl TrajectoryWriter {
    /// Opens `path` for writing.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Create`] if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| LoaderError::Create {
            path: path.clone(),
            source,
        })?;

        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        Ok(Self { path, writer })
    }

    /// Returns the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every price of `trajectory` on its own line and flushes.
    ///
    /// Prices use the shortest representation that parses back to the same
    /// `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Write`] or [`LoaderError::Flush`] on I/O failure.
    pub fn write(mut self, trajectory: &Trajectory) -> Result<PathBuf, LoaderError> {
        for price in trajectory {
            self.writer
                .write_record([price.to_string()])
                .map_err(|source| LoaderError::Write {
                    path: self.path.clone(),
                    source,
                })?;
        }
        self.writer.flush().map_err(|source| LoaderError::Flush {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            lines = trajectory.len(),
            "Forecast written to file"
        );
        Ok(self.path)
    }
}

impl std::fmt::Debug for TrajectoryWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrajectoryWriter")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
