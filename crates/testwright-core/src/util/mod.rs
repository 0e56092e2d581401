//! Utility modules for path handling.
//!
//! # Modules
//!
//! - [`paths`]: Generic path utilities (binary location, install root,
//!   tilde expansion)

pub mod paths;
