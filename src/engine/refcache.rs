//! Reference cache.
//!
//! A full reference search is the most expensive step of a move. Units built
//! from qualifier variants are structurally interchangeable, so references
//! discovered while moving one unit usually still resolve for the next. The
//! cache keeps the last full search's records and lets the engine skip the
//! search when every record re-validates against the next unit's primary
//! element; any mismatch or validation failure silently falls back to a full
//! search for that unit.

use tracing::{debug, trace};

use super::host::Host;

/// Per-unit search decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    /// Run the full (expensive) reference search.
    Full,
    /// Previously found references still resolve; skip the search.
    Skip,
}

/// Operation-scoped store of the last full search's reference records.
#[derive(Debug)]
pub struct ReferenceCache<R> {
    records: Vec<R>,
}

impl<R> Default for ReferenceCache<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ReferenceCache<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Decide whether the next unit needs a full search. `primary` is the
    /// unit's representative element.
    pub fn decide<H>(&self, host: &H, primary: &H::Element) -> Search
    where
        H: Host<Reference = R>,
    {
        if self.records.is_empty() {
            return Search::Full;
        }
        for record in &self.records {
            match host.reference_resolves_to(record, primary) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("cached reference no longer resolves; forcing full search");
                    return Search::Full;
                }
                Err(err) => {
                    debug!(error = %err, "reference validation failed; forcing full search");
                    return Search::Full;
                }
            }
        }
        trace!(records = self.records.len(), "all cached references resolve; skipping search");
        Search::Skip
    }

    /// Overwrite the cache with the records a full search just discovered.
    pub fn replace(&mut self, records: Vec<R>) {
        self.records = records;
    }
}
