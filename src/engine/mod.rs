//! Move orchestration.
//!
//! Drains the move unit queue strictly one unit at a time: compute the
//! destination for each of the unit's parent directories, ensure they exist,
//! resolve the unit's structural elements, decide full-search vs cached-skip,
//! invoke the host's move primitive, then settle the reference cache before
//! the next unit starts. A failing unit is reported to the user with the
//! offending path and dropped; the rest of the batch continues. There is no
//! retry and no rollback.

mod fs_host;
mod host;
mod refcache;

pub use fs_host::FsHost;
pub use host::{Host, SearchFlags};
pub use refcache::{ReferenceCache, Search};

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::errors::ResMoveError;
use crate::group::MoveUnit;
use crate::paths::PathMapping;
use crate::queue::MoveUnitQueue;

/// Title used for user-facing move failure notifications.
const ERROR_TITLE: &str = "Move Failed";

/// Outcome of one drained batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Paths moved, in completion order. A unit that fails midway still
    /// lists the files its earlier subgroups already moved.
    pub moved: Vec<PathBuf>,
    /// Failed units: the unit's primary path and the failure
    pub failed: Vec<(PathBuf, ResMoveError)>,
    /// Units whose move skipped the reference search via the cache
    pub search_skips: usize,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One user-initiated move operation: a queue, a path mapping fixed for the
/// operation's lifetime, and the operation-scoped reference cache. Consumed
/// by [`MoveOperation::run`].
pub struct MoveOperation<'h, H: Host> {
    host: &'h mut H,
    mapping: PathMapping,
    queue: MoveUnitQueue,
    cache: ReferenceCache<H::Reference>,
    flags: SearchFlags,
}

impl<'h, H: Host> MoveOperation<'h, H> {
    pub fn new(
        host: &'h mut H,
        mapping: PathMapping,
        queue: MoveUnitQueue,
        flags: SearchFlags,
    ) -> Self {
        Self {
            host,
            mapping,
            queue,
            cache: ReferenceCache::new(),
            flags,
        }
    }

    /// Drain the queue. An explicit loop keeps exactly one move in flight and
    /// survives arbitrarily long batches without growing the call stack.
    pub fn run(mut self) -> BatchReport {
        let mut report = BatchReport::default();
        while let Some(unit) = self.queue.pop() {
            let Some(primary_path) = unit.primary().map(|f| f.path().to_path_buf()) else {
                debug!("dropping empty move unit");
                continue;
            };
            debug!(
                unit = %primary_path.display(),
                files = unit.len(),
                remaining = self.queue.len(),
                "processing move unit"
            );
            if let Err(err) = self.process_unit(&unit, &primary_path, &mut report) {
                error!(code = err.code(), unit = %primary_path.display(), "{err}");
                self.host.notify_error(ERROR_TITLE, &err.to_string());
                report.failed.push((primary_path, err));
            }
        }
        info!(
            moved = report.moved.len(),
            failed = report.failed.len(),
            skips = report.search_skips,
            "batch drained"
        );
        report
    }

    fn process_unit(
        &mut self,
        unit: &MoveUnit,
        primary_path: &Path,
        report: &mut BatchReport,
    ) -> Result<(), ResMoveError> {
        // Qualified variants sit in sibling directories, so one unit can span
        // several parents; each gets its own remapped destination.
        let subgroups = unit.by_parent();

        let mut destinations = Vec::with_capacity(subgroups.len());
        for (parent, _) in &subgroups {
            let dest = self.mapping.remap(parent);
            self.host
                .mkdirs(&dest)
                .map_err(|e| ResMoveError::DestinationCreate {
                    path: dest.clone(),
                    context: e.to_string(),
                })?;
            destinations.push(dest);
        }

        // Resolve every file before moving anything, so an unresolvable
        // entry skips the whole unit instead of splitting it.
        let mut resolved: Vec<Vec<H::Element>> = Vec::with_capacity(subgroups.len());
        for (_, files) in &subgroups {
            let mut elements = Vec::with_capacity(files.len());
            for file in files.iter().copied() {
                let element = self.host.resolve_element(file).ok_or_else(|| {
                    ResMoveError::ElementUnresolved(file.path().to_path_buf())
                })?;
                elements.push(element);
            }
            resolved.push(elements);
        }

        let Some(primary) = resolved.first().and_then(|g| g.first()).cloned() else {
            return Err(ResMoveError::ElementUnresolved(primary_path.to_path_buf()));
        };

        let decision = self.cache.decide(self.host, &primary);
        let (flags, preview) = match decision {
            Search::Full => (self.flags, true),
            // Skipping the search makes a usages preview meaningless for an
            // element we can rewrite anyway.
            Search::Skip => (SearchFlags::none(), !self.host.is_writable(&primary)),
        };
        if decision == Search::Skip {
            report.search_skips += 1;
        }

        // Record each subgroup as soon as its move lands, so a failure on a
        // later subgroup still reports what already changed on disk.
        let mut discovered = Vec::new();
        for (((_, files), elements), dest) in
            subgroups.iter().zip(&resolved).zip(&destinations)
        {
            let refs = self
                .host
                .move_elements(elements, dest, flags, preview)
                .map_err(|e| ResMoveError::MoveFailed {
                    path: primary_path.to_path_buf(),
                    context: e.to_string(),
                })?;
            discovered.extend(refs);
            for file in files.iter().copied() {
                report.moved.push(file.path().to_path_buf());
            }
        }

        // Only a full search may overwrite the cache; a skip leaves the
        // previous records in place for the next unit.
        if decision == Search::Full {
            self.cache.replace(discovered);
        }
        Ok(())
    }
}
