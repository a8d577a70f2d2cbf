//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - CLI flags override config values (which are loaded from XML if present).
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Move resource files between project modules. Qualified sibling variants
/// (`drawable-hdpi/icon.png` next to `drawable/icon.png`) move along with the
/// selection automatically.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move resource files or directories to another project module"
)]
pub struct Args {
    /// Selected resource files or directories to move.
    #[arg(
        value_name = "PATHS",
        value_hint = ValueHint::AnyPath,
        required_unless_present = "print_config",
        num_args = 1..
    )]
    pub paths: Vec<PathBuf>,

    /// Name of the destination module.
    #[arg(
        long = "to",
        short = 't',
        value_name = "MODULE",
        required_unless_present = "print_config"
    )]
    pub target_module: Option<String>,

    /// Project base directory whose top-level directories are the modules
    /// (defaults to the current directory).
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub project_base: Option<PathBuf>,

    /// Qualifier delimiter in resource directory names.
    #[arg(long, value_name = "CHAR", help = "Qualifier delimiter (default '-')")]
    pub delimiter: Option<char>,

    /// Only accept selections under a directory with this name (e.g. 'res').
    #[arg(long, value_name = "NAME")]
    pub resources_root: Option<String>,

    /// Do not ask the move primitive to search for references.
    #[arg(long)]
    pub no_search_references: bool,

    /// Do not search inside comments.
    #[arg(long)]
    pub no_search_comments: bool,

    /// Do not search non-source files.
    #[arg(long)]
    pub no_search_non_source: bool,

    /// Show what would be done, but do not modify files/directories.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Write logs to this file in addition to stdout.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location used by res_move and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(delim) = self.delimiter {
            cfg.qualifier_delimiter = delim;
        }
        if let Some(root) = &self.resources_root {
            cfg.resources_root = Some(root.clone());
        }
        if self.no_search_references {
            cfg.search_references = false;
        }
        if self.no_search_comments {
            cfg.search_comments = false;
        }
        if self.no_search_non_source {
            cfg.search_non_source = false;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
