//! Destination path computation.
//! One PathMapping is fixed per user-initiated operation and remaps every
//! unit's parent directory from the source module root to the target root.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Source/target module root pair for one move operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    current: PathBuf,
    target: PathBuf,
}

impl PathMapping {
    pub fn new(current: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            current: current.into(),
            target: target.into(),
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Replace the `current` module prefix of `path` with the `target` one.
    ///
    /// Callers are expected to only pass paths under `current` (the
    /// enablement check guarantees this); a path outside the prefix is
    /// returned unchanged with a warning rather than treated as a runtime
    /// error. Use [`PathMapping::try_remap`] where the caller wants to handle
    /// the mismatch itself.
    pub fn remap(&self, path: &Path) -> PathBuf {
        match self.try_remap(path) {
            Some(mapped) => mapped,
            None => {
                warn!(
                    path = %path.display(),
                    prefix = %self.current.display(),
                    "path not under source module root; leaving it unchanged"
                );
                path.to_path_buf()
            }
        }
    }

    /// Checked variant of [`PathMapping::remap`]: None when `path` does not
    /// start with the source module root.
    pub fn try_remap(&self, path: &Path) -> Option<PathBuf> {
        let rel = path.strip_prefix(&self.current).ok()?;
        Some(self.target.join(rel))
    }
}
