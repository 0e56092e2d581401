//! Error types for testwright-mcp, plus the bridge from domain errors to
//! protocol errors.

use rmcp::model::ErrorData;
use thiserror::Error;

/// Result type alias for testwright-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in testwright-mcp
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from testwright-core
    #[error("Core error: {0}")]
    Core(#[from] testwright_core::Error),

    /// The stdio transport could not be established or ended abnormally.
    /// Fatal at startup; the binary exits non-zero.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Converts domain errors into MCP protocol errors.
///
/// Unknown-capability failures are the caller's mistake and map to
/// `invalid_params`; everything else (read failures) maps to
/// `internal_error`. The display text is preserved verbatim so the
/// client sees `Unknown capability: <name>` or the underlying I/O cause.
pub trait McpErrorExt {
    /// Convert into an `rmcp::model::ErrorData` for the per-request error
    /// channel.
    fn to_mcp_error(self) -> ErrorData;
}

impl McpErrorExt for testwright_core::Error {
    fn to_mcp_error(self) -> ErrorData {
        match &self {
            testwright_core::Error::UnknownCapability(_) => {
                ErrorData::invalid_params(self.to_string(), None)
            }
            _ => ErrorData::internal_error(self.to_string(), None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
