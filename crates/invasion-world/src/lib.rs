//! City graph for the alien invasion simulation.
//!
//! This crate models the map the aliens roam: cities as nodes holding their
//! labeled outgoing edges, the alien settled in each city, and the queue of
//! aliens contending for it during the current turn.
//!
//! # Modules
//!
//! - [`city`] -- [`City`] node with occupancy, arrival queue, destruction.
//! - [`city_map`] -- [`CityMap`] arena keyed by city name, graph queries and
//!   rendering of the surviving map.
//! - [`error`] -- Error types for graph construction.
//! - [`loader`] -- City-file parsing.

pub mod city;
pub mod city_map;
pub mod error;
pub mod loader;

// Re-export primary types at crate root.
pub use city::City;
pub use city_map::CityMap;
pub use error::WorldError;
pub use loader::{load_cities, parse_cities};
