//! Generic path utilities.
//!
//! Provides the building blocks for candidate-root discovery: locating the
//! running binary, deriving the install root from it, and expanding `~` in
//! user-supplied paths.

use std::env;
use std::path::{Path, PathBuf};

/// Directory containing the running binary.
///
/// Returns `None` when the executable path cannot be determined (for
/// example, when the process image has been unlinked).
pub fn binary_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Parent directory of the binary's directory.
///
/// When installed under `<root>/bin/`, this is the package root — the same
/// directory the relative content paths are anchored to in a built layout.
pub fn install_root() -> Option<PathBuf> {
    binary_dir().and_then(|dir| dir.parent().map(Path::to_path_buf))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_dir_exists() {
        let dir = binary_dir().expect("test binary should have a parent dir");
        assert!(dir.is_dir());
    }

    #[test]
    fn test_install_root_is_parent_of_binary_dir() {
        let bin = binary_dir().unwrap();
        let root = install_root().unwrap();
        assert_eq!(bin.parent().unwrap(), root);
    }

    #[test]
    fn test_expand_tilde_plain_path_unchanged() {
        assert_eq!(expand_tilde("/tmp/content"), PathBuf::from("/tmp/content"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_expand_tilde_expands_home() {
        let expanded = expand_tilde("~/content");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("/content"));
    }
}
