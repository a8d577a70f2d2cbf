//! Config module.
//! Provides configuration types, default paths, XML loading, and a template
//! file written on first run. CLI flags override anything loaded here.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Default delimiter separating a resource directory's base name from its
/// qualifier suffix (`drawable-hdpi`, `values-fr`).
pub const QUALIFIER_DELIMITER_DEFAULT: char = '-';
