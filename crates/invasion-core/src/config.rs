//! Configuration loading and typed config structures.
//!
//! A run can be described by an optional YAML file. This module defines
//! strongly-typed structs that mirror the YAML structure, and provides a
//! loader that reads it. Every field has a default, so an empty file (or no
//! file at all) yields a usable configuration.
//!
//! ```yaml
//! simulation:
//!   max_iterations: 10000
//!   seed: 42
//! input:
//!   cities_path: cities.txt
//!   alien_count: 4
//! logging:
//!   level: info
//!   plain: true
//! output:
//!   print_survivors: true
//!   journal_path: events.json
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::builder::DEFAULT_MAX_ITERATIONS;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvasionConfig {
    /// Turn loop settings.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Where the cities and aliens come from.
    #[serde(default)]
    pub input: InputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// What to produce once the run ends.
    #[serde(default)]
    pub output: OutputConfig,
}

impl InvasionConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Turn loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Per-alien move budget.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Master seed for random placement and random policies. A fresh seed
    /// is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

/// Input files and random alien count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// City file.
    #[serde(default)]
    pub cities_path: Option<PathBuf>,

    /// Alien file for a scripted run.
    #[serde(default)]
    pub aliens_path: Option<PathBuf>,

    /// Number of random aliens, used when no alien file is given.
    #[serde(default)]
    pub alien_count: Option<usize>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Print bare event lines without timestamps, levels or targets.
    #[serde(default = "default_plain")]
    pub plain: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            plain: default_plain(),
        }
    }
}

/// What to produce once the run ends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Print the surviving map in the city-file format.
    #[serde(default = "default_print_survivors")]
    pub print_survivors: bool,

    /// Write the event journal as JSON to this file.
    #[serde(default)]
    pub journal_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_survivors: default_print_survivors(),
            journal_path: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

const fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_plain() -> bool {
    true
}

const fn default_print_survivors() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = InvasionConfig::default();
        assert_eq!(config.simulation.max_iterations, 10_000);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.plain);
        assert!(config.output.print_survivors);
        assert!(config.input.cities_path.is_none());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
simulation:
  max_iterations: 50
  seed: 7
input:
  cities_path: maps/small.txt
  alien_count: 3
logging:
  level: debug
  plain: false
output:
  print_survivors: false
  journal_path: out/events.json
";
        let config = InvasionConfig::parse(yaml).unwrap();
        assert_eq!(config.simulation.max_iterations, 50);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.input.cities_path, Some(PathBuf::from("maps/small.txt")));
        assert_eq!(config.input.aliens_path, None);
        assert_eq!(config.input.alien_count, Some(3));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.plain);
        assert!(!config.output.print_survivors);
        assert_eq!(config.output.journal_path, Some(PathBuf::from("out/events.json")));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = InvasionConfig::parse("simulation:\n  seed: 1\n").unwrap();
        assert_eq!(config.simulation.seed, Some(1));
        assert_eq!(config.simulation.max_iterations, 10_000);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(InvasionConfig::parse("").unwrap(), InvasionConfig::default());
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        assert!(matches!(
            InvasionConfig::parse("simulation: [1, 2"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            InvasionConfig::from_file(Path::new("/definitely/not/here.yaml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
