//! World state, turn phases, and simulation runner for the alien invasion.
//!
//! This crate owns the turn cycle that drives the simulation: Movement,
//! Collisions and Settlement, repeated until every alien is dead, stuck, or
//! out of moves.
//!
//! # Modules
//!
//! - [`builder`] -- [`WorldBuilder`] for assembling a world from files,
//!   random placement, or hand-built aliens.
//! - [`config`] -- Configuration loading from YAML into strongly-typed
//!   structs.
//! - [`error`] -- Error types for world construction ([`BuildError`]).
//! - [`runner`] -- The simulation loop and its termination checks.
//! - [`turn`] -- The three-phase turn.
//! - [`world`] -- [`World`] state and the event journal.

pub mod builder;
pub mod config;
pub mod error;
pub mod runner;
pub mod turn;
pub mod world;

// Re-export primary types at crate root for convenience.
pub use builder::{DEFAULT_MAX_ITERATIONS, WorldBuilder};
pub use config::{ConfigError, InvasionConfig};
pub use error::BuildError;
pub use runner::{NoOpCallback, SimulationResult, TurnCallback, log_simulation_end, run_simulation};
pub use turn::{TurnSummary, run_turn};
pub use world::{EVENT_TARGET, World};
