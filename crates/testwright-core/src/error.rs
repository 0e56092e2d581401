//! Error types for testwright-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Testwright operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving catalog content.
///
/// All variants are request-scoped: they are returned to the caller through
/// the protocol's per-request error channel and never affect registry state.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested name matched neither the workflow nor the reference
    /// namespace.
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Every candidate root failed to produce a readable file. Carries the
    /// last attempted path and the underlying I/O failure.
    #[error("failed to read content at {path}: {source}")]
    ContentRead {
        /// Last path attempted.
        path: PathBuf,
        /// Underlying I/O error from the last attempt.
        source: std::io::Error,
    },
}

// ============================================================================
// Tests
// ============================================================================
