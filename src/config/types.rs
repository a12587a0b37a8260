use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::row_key::DEFAULT_PARTICLES;
use crate::sections::default_sections;

/// Config file names searched for, in order of precedence.
pub const CONFIG_FILES: &[&str] = &[".glossort.toml", "glossort.toml"];

/// Keys accepted in the `[global]` table, in normalized kebab-case.
pub const GLOBAL_KEYS: &[&str] = &[
    "heading-prefix",
    "sections",
    "particles",
    "default-file",
    "output-format",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        #[source]
        source: std::io::Error,
        path: String,
    },
    #[error("Failed to parse config: {0}")]
    ParseError(String),
    #[error("Invalid configuration in {path}: {message}")]
    Invalid { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Text placed before the section id to form its heading line
    pub heading_prefix: String,
    /// Section identifiers, in the order they must appear
    pub sections: Vec<String>,
    /// Leading words dropped from a phrase before it becomes a row key
    pub particles: Vec<String>,
    /// Document processed when no filename is given on the command line
    pub default_file: String,
    pub output_format: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            heading_prefix: "### ".to_string(),
            sections: default_sections(),
            particles: DEFAULT_PARTICLES.iter().map(|p| p.to_string()).collect(),
            default_file: "readme.md".to_string(),
            output_format: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
}

impl Config {
    /// Reject settings the locator or key extractor cannot work with.
    pub fn validate(&self, path: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::Invalid {
            path: path.to_string(),
            message,
        };
        let global = &self.global;

        if global.heading_prefix.trim().is_empty() {
            return Err(invalid("heading-prefix must not be empty".to_string()));
        }
        if global.sections.is_empty() {
            return Err(invalid("sections must list at least one section".to_string()));
        }

        let mut seen = HashSet::new();
        for section in &global.sections {
            if section.trim().is_empty() {
                return Err(invalid("section identifiers must not be empty".to_string()));
            }
            if !seen.insert(section.as_str()) {
                return Err(invalid(format!("duplicate section '{section}'")));
            }
        }

        for particle in &global.particles {
            if particle.is_empty() || particle.chars().any(char::is_whitespace) {
                return Err(invalid(format!(
                    "particle '{particle}' must be a single non-empty word"
                )));
            }
        }

        if let Some(format) = &global.output_format
            && !matches!(format.as_str(), "text" | "json")
        {
            return Err(invalid(format!(
                "unknown output-format '{format}' (expected text or json)"
            )));
        }

        Ok(())
    }
}
