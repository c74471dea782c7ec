//! Command-line driver for the alien invasion simulation.
//!
//! Startup sequence:
//!
//! 1. Parse flags and, if given, the YAML config file
//! 2. Merge them into [`RunSettings`]
//! 3. Initialize logging (plain event lines or the full format)
//! 4. Build the city graph and land the aliens
//! 5. Run turns until every alien is dead, stuck, or out of moves
//! 6. Print the surviving map and close the journal
//!
//! `RUST_LOG` overrides the configured log level. With `--debug` every move
//! is logged, otherwise only destructions and the final status line.

mod error;
mod journal;
mod settings;

use std::fs::File;
use std::io::{BufWriter, Write};

use clap::Parser;
use invasion_core::{
    InvasionConfig, NoOpCallback, World, WorldBuilder, log_simulation_end, run_simulation,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::journal::JournalWriter;
use crate::settings::{AlienSource, Cli, RunSettings};

fn main() -> Result<(), EngineError> {
    // 1. Parse flags and config.
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => InvasionConfig::from_file(path)?,
        None => InvasionConfig::default(),
    };

    // 2. Merge.
    let settings = RunSettings::resolve(cli, config, rand::random)?;

    // 3. Initialize logging.
    init_logging(&settings);
    debug!(
        cities = %settings.cities_path.display(),
        aliens = ?settings.aliens,
        max_iterations = settings.max_iterations,
        seed = settings.seed,
        "Invasion starting"
    );

    // 4. Build the world.
    let mut world = build_world(&settings)?;

    // 5. Run.
    let result = match &settings.journal_path {
        Some(path) => {
            let file = File::create(path).map_err(|source| EngineError::Journal {
                path: path.clone(),
                source,
            })?;
            let mut journal = JournalWriter::new(BufWriter::new(file));
            let result = run_simulation(&mut world, &mut journal);
            let entries = journal.finish().map_err(|source| EngineError::Journal {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), entries, "Journal written");
            result
        }
        None => run_simulation(&mut world, &mut NoOpCallback),
    };
    log_simulation_end(&result, &world);

    // 6. Survivors.
    if settings.print_survivors {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(world.cities().render_survivors().as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

/// Install the global `tracing` subscriber.
fn init_logging(settings: &RunSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if settings.plain {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .without_time()
            .with_level(false)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Load the city graph and land the aliens.
fn build_world(settings: &RunSettings) -> Result<World, EngineError> {
    let builder = WorldBuilder::from_city_file(&settings.cities_path)?;
    let builder = match &settings.aliens {
        AlienSource::Scripted(path) => builder.scripted_aliens_file(path)?,
        AlienSource::Random(count) => {
            let mut rng = StdRng::seed_from_u64(settings.seed);
            builder.random_aliens(*count, &mut rng)?
        }
    };
    Ok(builder.build(settings.max_iterations)?)
}
