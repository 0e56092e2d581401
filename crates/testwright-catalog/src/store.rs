//! Content resolution across ordered candidate roots.
//!
//! The same relative content layout exists in two places depending on how
//! the server is run: under the installed package root, or under the
//! developer's working tree. `ContentStore` holds the ordered list of roots
//! and tries each in turn on every read; the first success wins and the
//! last failure is surfaced when none succeeds.
//!
//! Content is never cached: each request re-reads its backing file into a
//! request-owned buffer, so pipelined requests cannot interfere.

use std::env;
use std::path::{Path, PathBuf};

use testwright_core::util::paths::{expand_tilde, install_root};
use testwright_core::{Error, Result};

/// Environment variable overriding candidate-root discovery.
pub const CONTENT_ROOT_ENV: &str = "TESTWRIGHT_CONTENT_ROOT";

/// Ordered candidate roots for resolving relative content paths.
#[derive(Clone, Debug)]
pub struct ContentStore {
    roots: Vec<PathBuf>,
}

impl ContentStore {
    /// Create a store over an explicit list of roots, tried in order.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Discover candidate roots for the running process.
    ///
    /// Checks in order:
    /// 1. `TESTWRIGHT_CONTENT_ROOT` environment variable (tilde expanded)
    /// 2. The install root (parent of the binary's directory)
    /// 3. The current working directory
    pub fn discover() -> Self {
        let mut roots = Vec::new();

        if let Ok(value) = env::var(CONTENT_ROOT_ENV) {
            let path = expand_tilde(&value);
            if path.exists() {
                roots.push(path);
            }
        }
        if let Some(root) = install_root() {
            roots.push(root);
        }
        if let Ok(cwd) = env::current_dir() {
            roots.push(cwd);
        }

        Self { roots }
    }

    /// The candidate roots, in resolution order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Read a relative path against each root in order.
    ///
    /// Any failure on one root falls through to the next; when every root
    /// fails, the last attempt's path and cause are surfaced as
    /// [`Error::ContentRead`].
    pub async fn read(&self, relative: &Path) -> Result<String> {
        let mut last_failure: Option<(PathBuf, std::io::Error)> = None;

        for root in &self.roots {
            let candidate = root.join(relative);
            match tokio::fs::read_to_string(&candidate).await {
                Ok(content) => return Ok(content),
                Err(source) => {
                    tracing::debug!(path = %candidate.display(), error = %source, "candidate root miss");
                    last_failure = Some((candidate, source));
                }
            }
        }

        let (path, source) = last_failure.unwrap_or_else(|| {
            (
                relative.to_path_buf(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no candidate roots configured"),
            )
        });
        Err(Error::ContentRead { path, source })
    }
}

// ============================================================================
// Tests
// ============================================================================
