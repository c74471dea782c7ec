//! Step-by-step world assembly.
//!
//! A [`WorldBuilder`] starts from a city graph, collects aliens from any
//! mix of sources (an alien file, random placement, hand-built aliens) and
//! validates the lot in [`WorldBuilder::build`].

use std::path::Path;

use invasion_agents::{Alien, load_scripted_aliens, parse_scripted_aliens, spawn_random_aliens};
use invasion_world::{CityMap, load_cities, parse_cities};
use rand::Rng;

use crate::error::BuildError;
use crate::world::World;

/// Default per-alien move budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10_000;

/// Collects a city graph and aliens into a [`World`].
#[derive(Debug)]
pub struct WorldBuilder {
    cities: CityMap,
    aliens: Vec<Alien>,
}

impl WorldBuilder {
    /// Start from an already-built city graph.
    pub const fn new(cities: CityMap) -> Self {
        Self {
            cities,
            aliens: Vec::new(),
        }
    }

    /// Start from a city description.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::World`] if the description is malformed.
    pub fn from_city_text(text: &str) -> Result<Self, BuildError> {
        Ok(Self::new(parse_cities(text)?))
    }

    /// Start from a city file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::World`] if the file cannot be read or is
    /// malformed.
    pub fn from_city_file(path: &Path) -> Result<Self, BuildError> {
        Ok(Self::new(load_cities(path)?))
    }

    /// The city graph the world will be built on.
    pub const fn cities(&self) -> &CityMap {
        &self.cities
    }

    /// Add scripted aliens from an alien description.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Agent`] if the description is malformed or
    /// refers to unknown cities.
    pub fn scripted_aliens(mut self, text: &str) -> Result<Self, BuildError> {
        let aliens = parse_scripted_aliens(text, &self.cities)?;
        self.aliens.extend(aliens);
        Ok(self)
    }

    /// Add scripted aliens from an alien file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Agent`] if the file cannot be read or is
    /// malformed.
    pub fn scripted_aliens_file(mut self, path: &Path) -> Result<Self, BuildError> {
        let aliens = load_scripted_aliens(path, &self.cities)?;
        self.aliens.extend(aliens);
        Ok(self)
    }

    /// Add `count` randomly-steered aliens on distinct random cities.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Agent`] if `count` is zero or exceeds the
    /// number of cities.
    pub fn random_aliens<R: Rng>(mut self, count: usize, rng: &mut R) -> Result<Self, BuildError> {
        let aliens = spawn_random_aliens(count, &self.cities, rng)?;
        self.aliens.extend(aliens);
        Ok(self)
    }

    /// Add a single hand-built alien.
    #[must_use]
    pub fn with_alien(mut self, alien: Alien) -> Self {
        self.aliens.push(alien);
        self
    }

    /// Validate and assemble the world.
    ///
    /// # Errors
    ///
    /// See [`World::new`].
    pub fn build(self, max_iterations: u32) -> Result<World, BuildError> {
        World::new(self.cities, self.aliens, max_iterations)
    }
}
