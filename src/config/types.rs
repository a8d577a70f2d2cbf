//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::QUALIFIER_DELIMITER_DEFAULT;
use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the move engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delimiter separating a directory's base name from its qualifier suffix
    pub qualifier_delimiter: char,
    /// When set, selections must live under a directory with this name
    /// (files two levels below it, directories directly below it)
    pub resources_root: Option<String>,
    /// Ask the move primitive to search for references to the moved elements
    pub search_references: bool,
    /// Ask the move primitive to search inside comments
    pub search_comments: bool,
    /// Ask the move primitive to search non-source files
    pub search_non_source: bool,
    /// If true, print actions but do not modify the filesystem
    pub dry_run: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            qualifier_delimiter: QUALIFIER_DELIMITER_DEFAULT,
            resources_root: None,
            search_references: true,
            search_comments: true,
            search_non_source: true,
            dry_run: false,
            log_level: LogLevel::Normal,
            // paths::default_log_path() returns Option<PathBuf>; best effort.
            log_file: paths::default_log_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parse_aliases() {
        assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn default_search_flags_all_on() {
        let cfg = Config::default();
        assert!(cfg.search_references);
        assert!(cfg.search_comments);
        assert!(cfg.search_non_source);
        assert_eq!(cfg.qualifier_delimiter, '-');
        assert!(cfg.resources_root.is_none());
    }
}
