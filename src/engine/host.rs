//! Host service boundary.
//!
//! The engine never touches structural elements or performs moves itself; it
//! calls into a [`Host`]. Any implementation satisfying this contract is
//! substitutable, which is how the tests drive failure recovery and the
//! reference-cache policy with fakes.

use anyhow::Result;
use std::path::Path;

use crate::selection::SelectedFile;

/// The three search booleans handed to the move primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFlags {
    /// Search for references to the moved elements
    pub references: bool,
    /// Search inside comments
    pub comments: bool,
    /// Search non-source files
    pub non_source: bool,
}

impl SearchFlags {
    pub fn all() -> Self {
        Self {
            references: true,
            comments: true,
            non_source: true,
        }
    }

    /// All searches disabled; used when cached references are known to still
    /// resolve to the unit being moved.
    pub fn none() -> Self {
        Self {
            references: false,
            comments: false,
            non_source: false,
        }
    }

    pub fn is_none(&self) -> bool {
        !self.references && !self.comments && !self.non_source
    }
}

/// Services the engine requires from its host.
pub trait Host {
    /// The host's semantic representation of a file/directory, distinct from
    /// its raw path.
    type Element: Clone;
    /// Opaque handle for "element X refers to location Y", produced by the
    /// move primitive as a side effect of a full reference search.
    type Reference: Clone;

    /// Create all missing segments of `path` and any parents.
    fn mkdirs(&mut self, path: &Path) -> Result<()>;

    /// Look up the structural element behind a selected entry, or None when
    /// the entry no longer resolves.
    fn resolve_element(&self, file: &SelectedFile) -> Option<Self::Element>;

    /// Whether the element may be modified in place.
    fn is_writable(&self, element: &Self::Element) -> bool;

    /// Move `elements` into `destination`, searching per `flags`, and return
    /// the references discovered along the way. `preview_usages` asks the
    /// host to show found usages before committing, where it supports that.
    fn move_elements(
        &mut self,
        elements: &[Self::Element],
        destination: &Path,
        flags: SearchFlags,
        preview_usages: bool,
    ) -> Result<Vec<Self::Reference>>;

    /// Whether a previously discovered reference still legitimately resolves
    /// to `element`. An Err means validation itself failed and is treated by
    /// the engine like a mismatch.
    fn reference_resolves_to(
        &self,
        record: &Self::Reference,
        element: &Self::Element,
    ) -> Result<bool>;

    /// Show a titled error to the user.
    fn notify_error(&self, title: &str, message: &str);
}
