//! Qualifier grouping.
//!
//! Resource systems replicate the same logical asset across qualifier-suffixed
//! sibling directories (`drawable`, `drawable-hdpi`, `values-fr`). Moving only
//! the selected base file would silently break the asset set, so a flat file
//! selection is expanded: for every selected file we look for same-named files
//! in sibling directories sharing the base name before the delimiter, and the
//! whole set becomes one atomic move unit. Directory selections are never
//! expanded; each selected directory is its own unit.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::selection::{SelectedFile, Selection};

/// The atomic group of files relocated together in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveUnit {
    files: Vec<SelectedFile>,
}

impl MoveUnit {
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The unit's representative entry (first in stable order), or None for
    /// a unit holding no files.
    pub fn primary(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    /// The unit's files grouped by parent directory, preserving file order.
    /// Qualified variants live in different parents, so a unit usually yields
    /// one subgroup per variant directory.
    pub fn by_parent(&self) -> Vec<(PathBuf, Vec<&SelectedFile>)> {
        let mut groups: Vec<(PathBuf, Vec<&SelectedFile>)> = Vec::new();
        for file in &self.files {
            let Some(parent) = file.parent() else {
                continue;
            };
            if let Some((_, members)) = groups.iter_mut().find(|(p, _)| p == parent) {
                members.push(file);
            } else {
                groups.push((parent.to_path_buf(), vec![file]));
            }
        }
        groups
    }
}

/// Directory name truncated at the first qualifier delimiter.
fn base_name(name: &str, delimiter: char) -> &str {
    name.split(delimiter).next().unwrap_or(name)
}

/// Sibling directories of `dir` whose base name matches, excluding `dir`.
fn qualified_siblings(dir: &Path, delimiter: char) -> Vec<PathBuf> {
    let Some(parent) = dir.parent() else {
        return Vec::new();
    };
    let Some(dir_name) = dir.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    let base = base_name(dir_name, delimiter);

    let Ok(entries) = fs::read_dir(parent) else {
        debug!(dir = %parent.display(), "cannot list siblings");
        return Vec::new();
    };

    let mut siblings: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            if name != dir_name && base_name(&name, delimiter) == base {
                Some(e.path())
            } else {
                None
            }
        })
        .collect();
    siblings.sort();
    siblings
}

/// Build move units from a selection.
///
/// Flat file selections are bucketed by parent directory and each bucket is
/// expanded with same-named files from qualifier siblings; every bucket
/// becomes one unit. A file appears in at most one unit even when both a base
/// file and one of its variants were selected explicitly. Directory
/// selections yield one unit per directory in original order.
pub fn build_units(selection: &Selection, delimiter: char) -> Vec<MoveUnit> {
    if selection.all_directories() {
        return selection
            .files()
            .iter()
            .map(|d| MoveUnit::new(vec![d.clone()]))
            .collect();
    }

    // Bucket by parent directory, keeping first-seen parent order.
    let mut parents: Vec<PathBuf> = Vec::new();
    let mut buckets: Vec<BTreeSet<SelectedFile>> = Vec::new();
    for file in selection.files() {
        let Some(parent) = file.parent().map(Path::to_path_buf) else {
            continue;
        };
        match parents.iter().position(|p| *p == parent) {
            Some(i) => {
                buckets[i].insert(file.clone());
            }
            None => {
                parents.push(parent);
                buckets.push(BTreeSet::from([file.clone()]));
            }
        }
    }

    // Pull same-named files from qualifier siblings into each bucket.
    for (parent, bucket) in parents.iter().zip(buckets.iter_mut()) {
        let siblings = qualified_siblings(parent, delimiter);
        let selected: Vec<SelectedFile> = bucket.iter().cloned().collect();
        for file in &selected {
            let Some(name) = file.file_name() else {
                continue;
            };
            for sibling in &siblings {
                let candidate = sibling.join(name);
                if candidate.is_file() {
                    bucket.insert(SelectedFile::new(candidate, false));
                }
            }
        }
    }

    // A variant pulled into one bucket may also have been selected directly
    // (its own bucket); keep only the first occurrence so no file is moved
    // twice.
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();
    let mut units = Vec::new();
    for bucket in buckets {
        let files: Vec<SelectedFile> = bucket
            .into_iter()
            .filter(|f| seen.insert(f.path().to_path_buf()))
            .collect();
        if !files.is_empty() {
            units.push(MoveUnit::new(files));
        }
    }
    units
}
