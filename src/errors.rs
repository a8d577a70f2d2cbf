//! Typed error definitions for res_move.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

/// Per-unit and operation-level failures surfaced by the move engine.
#[derive(Debug, Error)]
pub enum ResMoveError {
    #[error("Could not create destination directory {path}: {context}")]
    DestinationCreate { path: PathBuf, context: String },

    #[error("No structural element found for {0}")]
    ElementUnresolved(PathBuf),

    #[error("Move primitive failed for {path}: {context}")]
    MoveFailed { path: PathBuf, context: String },

    #[error("Cached reference no longer resolves: {0}")]
    StaleReference(String),

    #[error("Unknown target module: {0}")]
    UnknownTargetModule(String),

    #[error("Target module '{0}' is the selection's own module")]
    TargetIsCurrentModule(String),
}

impl ResMoveError {
    /// Stable machine-readable code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            ResMoveError::DestinationCreate { .. } => "destination_create",
            ResMoveError::ElementUnresolved(_) => "element_unresolved",
            ResMoveError::MoveFailed { .. } => "move_failed",
            ResMoveError::StaleReference(_) => "stale_reference",
            ResMoveError::UnknownTargetModule(_) => "unknown_target_module",
            ResMoveError::TargetIsCurrentModule(_) => "target_is_current_module",
        }
    }
}

/// Reasons the move action is not offered at all.
///
/// These are precondition violations detected before any work starts; they
/// are never shown as batch errors, the action is simply unavailable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnablementError {
    #[error("Project has fewer than two modules")]
    TooFewModules,

    #[error("Nothing is selected")]
    EmptySelection,

    #[error("Selection mixes files and directories")]
    MixedSelection,

    #[error("Selected entry is outside the '{root}' resources directory: {path}")]
    OutsideResourcesRoot { root: String, path: PathBuf },

    #[error("Selected entry is not under any module root: {0}")]
    OutsideModules(PathBuf),

    #[error("Selection spans module '{0}' non-contiguously")]
    ModuleGap(String),
}
