//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a template on first run (unless RES_MOVE_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; selection and module
//!   validation happen elsewhere.
//! - Unknown XML fields are a hard parse error (serde deny_unknown_fields) to
//!   surface misconfigurations early.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};

/// Environment variable naming an explicit config file location.
pub const CONFIG_ENV: &str = "RES_MOVE_CONFIG";

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    qualifier_delimiter: Option<String>,
    resources_root: Option<String>,
    search_references: Option<bool>,
    search_comments: Option<bool>,
    search_non_source: Option<bool>,
    log_level: Option<String>,
    log_file: Option<String>,
}

/// Outcome of the startup config load.
#[derive(Debug)]
pub enum LoadResult {
    /// A config file existed and parsed
    Loaded(Config),
    /// No config existed; a template was written for the user to edit
    CreatedTemplate(PathBuf),
    /// No config file in play; built-in defaults apply
    Defaults,
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(s) = parsed.qualifier_delimiter.as_deref() {
        if let Some(c) = s.trim().chars().next() {
            cfg.qualifier_delimiter = c;
        }
    }
    if let Some(s) = parsed.resources_root.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.resources_root = Some(trimmed.to_string());
        }
    }
    if let Some(b) = parsed.search_references {
        cfg.search_references = b;
    }
    if let Some(b) = parsed.search_comments {
        cfg.search_comments = b;
    }
    if let Some(b) = parsed.search_non_source {
        cfg.search_non_source = b;
    }
    if let Some(s) = parsed.log_level.as_deref() {
        if let Some(level) = LogLevel::parse(s.trim()) {
            cfg.log_level = level;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    cfg
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Startup loader.
/// - RES_MOVE_CONFIG set: that file must exist and parse (errors are fatal).
/// - Otherwise: load the platform default path if present, or write a
///   template there and report it so the CLI can tell the user.
pub fn load_config() -> Result<LoadResult> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(p);
        let cfg = load_config_from_xml_path(&path)?;
        return Ok(LoadResult::Loaded(cfg));
    }

    let Some(cfg_path) = default_config_path() else {
        return Ok(LoadResult::Defaults);
    };

    if cfg_path.exists() {
        let cfg = load_config_from_xml_path(&cfg_path)?;
        return Ok(LoadResult::Loaded(cfg));
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Ok(LoadResult::CreatedTemplate(cfg_path)),
        // Template creation is best-effort; the tool still runs on defaults.
        Err(_) => Ok(LoadResult::Defaults),
    }
}

/// Create the default template config file and parent directory.
/// Refuses to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow::anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/res_move.log".into());

    let content = format!(
        "<!--\n  res_move configuration (XML)\n\n  Fields:\n    qualifier_delimiter -> character separating a directory's base name from its qualifier suffix (default '-')\n    resources_root      -> when set, only selections under a directory with this name are accepted (e.g. 'res')\n    search_references   -> ask the move primitive to update references (true/false)\n    search_comments     -> also search inside comments (true/false)\n    search_non_source   -> also search non-source files (true/false)\n    log_level           -> quiet | normal | info | debug\n    log_file            -> path to log file (optional; stdout/stderr still used)\n\n  Notes:\n    - CLI flags override XML values.\n-->\n<config>\n  <qualifier_delimiter>-</qualifier_delimiter>\n  <search_references>true</search_references>\n  <search_comments>true</search_comments>\n  <search_non_source>true</search_non_source>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n</config>\n",
        suggested_log
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;

    info!("Created template config at {}", path.display());
    Ok(())
}
