//! Snapshot loading errors.

use std::path::PathBuf;

use tempcalc_domain::error::TempCalcError;

/// Errors raised while reading a snapshot dump.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("failed to parse snapshot JSON")]
    Json(#[from] serde_json::Error),
}

impl From<SnapshotError> for TempCalcError {
    fn from(err: SnapshotError) -> Self {
        Self::Source(Box::new(err))
    }
}
