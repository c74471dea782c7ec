//! Error types for the invasion binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes between reading the command line and printing the result.

use std::path::PathBuf;

/// Top-level error for the invasion binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: invasion_core::ConfigError,
    },

    /// The world could not be assembled.
    #[error("{source}")]
    Build {
        /// The underlying build error.
        #[from]
        source: invasion_core::BuildError,
    },

    /// Neither the command line nor the config named a city file.
    #[error("please input path to file containing cities")]
    MissingCities,

    /// No alien file and no positive alien count.
    #[error("please input correct number of aliens")]
    InvalidAlienCount,

    /// The event journal could not be written.
    #[error("failed to write journal {path}: {source}")]
    Journal {
        /// The journal file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the surviving map to stdout failed.
    #[error("failed to write output: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
