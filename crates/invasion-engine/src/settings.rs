//! Command-line flags and their merge with the YAML configuration.
//!
//! Flags win over config values, config values win over defaults. The
//! merged result is a [`RunSettings`] with every choice made.

use std::path::PathBuf;

use clap::Parser;
use invasion_core::InvasionConfig;

use crate::error::EngineError;

/// Simulate a mad alien invasion over a map of cities.
#[derive(Parser, Debug)]
#[command(name = "invasion")]
#[command(about = "Simulate a mad alien invasion over a map of cities")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File containing cities
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Number of randomly placed aliens
    #[arg(long, value_name = "COUNT")]
    pub aliens: Option<usize>,

    /// File containing scripted aliens, used instead of random ones
    #[arg(long, value_name = "FILE")]
    pub aliens_file: Option<PathBuf>,

    /// Maximum iterations per alien
    #[arg(long, value_name = "COUNT")]
    pub iterations: Option<u32>,

    /// Master seed for placement and random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log every move, not just destructions
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Write the event journal as JSON lines to this file
    #[arg(long, value_name = "FILE")]
    pub journal: Option<PathBuf>,

    /// Do not print the surviving map at the end
    #[arg(long, default_value_t = false)]
    pub no_survivors: bool,
}

/// Where the aliens come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlienSource {
    /// Scripted aliens read from a file.
    Scripted(PathBuf),
    /// This many aliens placed and steered at random.
    Random(usize),
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// City file.
    pub cities_path: PathBuf,
    /// Alien source.
    pub aliens: AlienSource,
    /// Per-alien move budget.
    pub max_iterations: u32,
    /// Master seed.
    pub seed: u64,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Bare event lines instead of the full log format.
    pub plain: bool,
    /// Print the surviving map at the end.
    pub print_survivors: bool,
    /// JSON-lines journal file.
    pub journal_path: Option<PathBuf>,
}

impl RunSettings {
    /// Merge flags over config. `fresh_seed` is only called when neither
    /// names a seed.
    pub fn resolve(
        cli: Cli,
        config: InvasionConfig,
        fresh_seed: impl FnOnce() -> u64,
    ) -> Result<Self, EngineError> {
        let InvasionConfig {
            simulation,
            input,
            logging,
            output,
        } = config;

        let cities_path = cli
            .path
            .or(input.cities_path)
            .ok_or(EngineError::MissingCities)?;

        let aliens = match (cli.aliens_file, cli.aliens) {
            (Some(path), _) => AlienSource::Scripted(path),
            (None, Some(count)) => random_source(count)?,
            (None, None) => match (input.aliens_path, input.alien_count) {
                (Some(path), _) => AlienSource::Scripted(path),
                (None, Some(count)) => random_source(count)?,
                (None, None) => return Err(EngineError::InvalidAlienCount),
            },
        };

        let log_level = if cli.debug {
            "debug".to_owned()
        } else {
            logging.level
        };

        Ok(Self {
            cities_path,
            aliens,
            max_iterations: cli.iterations.unwrap_or(simulation.max_iterations),
            seed: cli.seed.or(simulation.seed).unwrap_or_else(fresh_seed),
            log_level,
            plain: logging.plain,
            print_survivors: output.print_survivors && !cli.no_survivors,
            journal_path: cli.journal.or(output.journal_path),
        })
    }
}

const fn random_source(count: usize) -> Result<AlienSource, EngineError> {
    if count == 0 {
        return Err(EngineError::InvalidAlienCount);
    }
    Ok(AlienSource::Random(count))
}
