//! Testwright Core — shared errors and path utilities.
//!
//! This crate provides the foundational types used across all Testwright
//! crates. It has no internal Testwright dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Path utilities (binary location, install root, tilde expansion)

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::paths::{binary_dir, expand_tilde, install_root};
