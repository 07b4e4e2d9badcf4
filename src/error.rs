//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::curve::CurveFamily;

/// Errors surfaced to callers of the sampler and scene loader.
///
/// Per-sample numeric failures are not errors; they show up as gaps in the
/// produced series (see [`crate::sampler::Evaluation`]).
#[derive(Debug, Error)]
pub enum CurveError {
    /// The kind string names no curve in the requested family.
    #[error("unknown {family} function type: {kind}")]
    InvalidCurveKind {
        /// Family the kind was looked up in.
        family: CurveFamily,
        /// Kind string as given by the caller.
        kind: String,
    },
    /// A scene file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A scene file did not parse.
    #[error("invalid scene: {0}")]
    Scene(#[from] ron::error::SpannedError),
}
