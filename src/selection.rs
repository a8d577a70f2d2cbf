//! User selection model and the enablement check.
//!
//! Enablement mirrors the action's availability rules: at least two modules,
//! a non-empty selection that is all files or all directories (never mixed),
//! every entry under a module root and, per module, contiguous membership
//! when walking the selection in order. A violated precondition means the
//! action is simply unavailable; it is never a batch error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::EnablementError;
use crate::project::{Module, Project};

/// A selected file-system entry, file or directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectedFile {
    path: PathBuf,
    is_dir: bool,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }

    /// Build from an on-disk path, statting it for the directory flag.
    pub fn from_path(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let meta = fs::symlink_metadata(&path)?;
        Ok(Self {
            is_dir: meta.file_type().is_dir(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }

    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_name()
    }
}

/// The user's selection, in original order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    files: Vec<SelectedFile>,
}

impl Selection {
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// True when every entry is a directory (directory-selection mode).
    pub fn all_directories(&self) -> bool {
        !self.files.is_empty() && self.files.iter().all(|f| f.is_dir())
    }

    /// Run the full enablement check and return the source module (the one
    /// containing the first selected entry).
    pub fn check_enablement<'p>(
        &self,
        project: &'p Project,
        resources_root: Option<&str>,
    ) -> Result<&'p Module, EnablementError> {
        if project.modules().len() < 2 {
            return Err(EnablementError::TooFewModules);
        }
        if self.files.is_empty() {
            return Err(EnablementError::EmptySelection);
        }

        let any_dir = self.files.iter().any(|f| f.is_dir());
        let any_file = self.files.iter().any(|f| !f.is_dir());
        if any_dir && any_file {
            return Err(EnablementError::MixedSelection);
        }

        // Directories must sit directly under the resources root, plain files
        // one level deeper (inside a resource-type directory).
        if let Some(root) = resources_root {
            for file in &self.files {
                let anchor = if file.is_dir() {
                    file.parent()
                } else {
                    file.parent().and_then(Path::parent)
                };
                let anchor_name = anchor.and_then(|p| p.file_name()).and_then(|n| n.to_str());
                if anchor_name != Some(root) {
                    return Err(EnablementError::OutsideResourcesRoot {
                        root: root.to_string(),
                        path: file.path().to_path_buf(),
                    });
                }
            }
        }

        for file in &self.files {
            if project.module_of(file.path()).is_none() {
                return Err(EnablementError::OutsideModules(file.path().to_path_buf()));
            }
        }

        // Contiguity: walking the selection in order, a module's members must
        // not be interrupted by entries of another module.
        for module in project.modules() {
            let mut has_match = false;
            for file in &self.files {
                if module.contains(file.path()) {
                    has_match = true;
                } else if has_match {
                    return Err(EnablementError::ModuleGap(module.name().to_string()));
                }
            }
        }

        let first = &self.files[0];
        project
            .module_of(first.path())
            .ok_or_else(|| EnablementError::OutsideModules(first.path().to_path_buf()))
    }
}
