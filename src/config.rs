//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find an appendix.toml, and if present we load settings from there.
//! This provides the artifact destination and the viewer's wrapping width.

use crate::input::DEFAULT_ARTIFACT;
use facet::Facet;
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "appendix.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from appendix.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_ARTIFACT.to_string())]
    /// Where `parse` writes the JSON artifact and `view` reads it from.
    pub output: String,
    #[facet(default = 100)]
    /// Maximum line width for wrapping descriptions in the viewer.
    pub wrap_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: DEFAULT_ARTIFACT.to_string(),
            wrap_width: 100,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from appendix.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(_) => tracing::warn!("ignoring unreadable settings in {}", path.display()),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
