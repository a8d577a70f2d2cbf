//! Core library for `res_move`.
//!
//! Moves resource files (or whole resource directories) from one project
//! module to another. Flat file selections are expanded with their
//! qualifier-suffixed sibling variants (`drawable-hdpi/icon.png` follows
//! `drawable/icon.png`) so a logical asset never gets split across modules.
//! Units are drained strictly one at a time; a failing unit is reported and
//! skipped, never aborting the rest of the batch.
//!
//! The host side (directory creation, element lookup, the actual move with
//! reference search) sits behind the [`engine::Host`] trait. [`engine::FsHost`]
//! is the plain-filesystem implementation used by the CLI; tests substitute
//! fakes to drive the reference-cache and failure-recovery paths.

pub mod config;
pub mod engine;
pub mod errors;
pub mod group;
pub mod output;
pub mod paths;
pub mod project;
pub mod queue;
pub mod selection;

pub mod cli;

pub use config::{Config, LogLevel};
pub use engine::{BatchReport, FsHost, Host, MoveOperation, SearchFlags};
pub use errors::{EnablementError, ResMoveError};
pub use group::{MoveUnit, build_units};
pub use paths::PathMapping;
pub use project::{Module, Project};
pub use queue::MoveUnitQueue;
pub use selection::{SelectedFile, Selection};
