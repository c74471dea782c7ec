//! Aliens and the policies that steer them.
//!
//! This crate holds the per-alien logic of the invasion: alien state and the
//! move/kill/go-back operations, the direction policies, and the two ways of
//! creating aliens (a scripted alien file, or random placement).
//!
//! # Modules
//!
//! - [`alien`] -- [`Alien`] state and per-turn operations
//! - [`error`] -- Error types for alien creation ([`AgentError`])
//! - [`placement`] -- Random placement on distinct cities
//! - [`policy`] -- [`DirectionPolicy`] trait, scripted and random policies
//! - [`script`] -- Alien-file parsing

pub mod alien;
pub mod error;
pub mod placement;
pub mod policy;
pub mod script;

// Re-export primary types at crate root for convenience.
pub use alien::Alien;
pub use error::AgentError;
pub use placement::spawn_random_aliens;
pub use policy::{DirectionPolicy, RandomPolicy, ScriptedPolicy};
pub use script::{load_scripted_aliens, parse_scripted_aliens};
