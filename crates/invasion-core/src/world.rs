//! The simulation world: cities, aliens, the turn counter and the journal.
//!
//! [`World`] owns the city graph and every alien. The two live in separate
//! fields so that a turn phase can borrow one alien mutably while handing
//! the city graph to it.
//!
//! Every event a turn produces goes through [`World::record`], which both
//! appends it to the journal and emits it through `tracing`.

use std::collections::{BTreeMap, BTreeSet};

use invasion_agents::Alien;
use invasion_types::{AlienId, EndReason, InvasionEvent, JournalEntry};
use invasion_world::CityMap;
use tracing::{debug, info, warn};

use crate::error::BuildError;

/// `tracing` target for the per-event log lines.
///
/// Event lines carry no structured fields so that a plain formatter prints
/// exactly the event text.
pub const EVENT_TARGET: &str = "invasion::events";

/// Full simulation state.
#[derive(Debug)]
pub struct World {
    /// The city graph.
    pub(crate) cities: CityMap,
    /// Every alien, dead or alive, keyed by id.
    pub(crate) aliens: BTreeMap<AlienId, Alien>,
    /// Per-alien move budget.
    pub(crate) max_iterations: u32,
    /// Number of turns executed so far.
    pub(crate) turn: u64,
    /// Every event recorded so far, in order.
    pub(crate) journal: Vec<JournalEntry>,
}

impl World {
    /// Assemble a world and place every alien in its starting city.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MoreAliensThanCities`] when aliens outnumber
    /// cities, and [`BuildError::UnknownStartCity`],
    /// [`BuildError::DuplicateAlien`] or [`BuildError::StartCityTaken`] when
    /// an alien cannot be placed.
    pub fn new(
        mut cities: CityMap,
        aliens: Vec<Alien>,
        max_iterations: u32,
    ) -> Result<Self, BuildError> {
        if aliens.len() > cities.city_count() {
            return Err(BuildError::MoreAliensThanCities {
                aliens: aliens.len(),
                cities: cities.city_count(),
            });
        }

        let mut placed: BTreeMap<AlienId, Alien> = BTreeMap::new();
        let mut taken = BTreeSet::new();
        for alien in aliens {
            let id = alien.id();
            let Some(start) = cities.get_mut(alien.origin().as_str()) else {
                return Err(BuildError::UnknownStartCity {
                    alien: id,
                    city: alien.origin().clone(),
                });
            };
            if placed.contains_key(&id) {
                return Err(BuildError::DuplicateAlien(id));
            }
            if !taken.insert(alien.origin().clone()) {
                return Err(BuildError::StartCityTaken {
                    alien: id,
                    city: alien.origin().clone(),
                });
            }
            start.occupy(id);
            placed.insert(id, alien);
        }

        debug!(
            cities = cities.city_count(),
            aliens = placed.len(),
            max_iterations,
            "World built"
        );

        Ok(Self {
            cities,
            aliens: placed,
            max_iterations,
            turn: 0,
            journal: Vec::new(),
        })
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// The city graph.
    pub const fn cities(&self) -> &CityMap {
        &self.cities
    }

    /// Look up an alien by id.
    pub fn alien(&self, id: AlienId) -> Option<&Alien> {
        self.aliens.get(&id)
    }

    /// Every alien in ascending id order.
    pub fn aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.values()
    }

    /// Number of aliens that are neither dead nor stuck.
    pub fn active_count(&self) -> usize {
        self.aliens.values().filter(|a| a.is_active()).count()
    }

    /// Number of dead aliens.
    pub fn dead_count(&self) -> usize {
        self.aliens.values().filter(|a| a.is_dead()).count()
    }

    /// Per-alien move budget.
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Number of turns executed so far.
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    /// Every event recorded so far.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    // -------------------------------------------------------------------
    // Termination
    // -------------------------------------------------------------------

    /// Why the simulation should stop now, if it should.
    ///
    /// Checked in order: no aliens at all, every alien dead or stuck, every
    /// remaining alien at its move budget.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.aliens.is_empty() {
            return Some(EndReason::NoAliens);
        }

        let mut active = self.aliens.values().filter(|a| a.is_active()).peekable();
        if active.peek().is_none() {
            return Some(EndReason::AllDeadOrStuck);
        }
        if active.all(|a| a.iteration() >= self.max_iterations) {
            return Some(EndReason::AllReachedMaxIterations);
        }

        None
    }

    // -------------------------------------------------------------------
    // Journal
    // -------------------------------------------------------------------

    /// Append an event to the journal and log it.
    pub(crate) fn record(&mut self, event: InvasionEvent) {
        match &event {
            InvasionEvent::AlienLost { .. } => warn!(target: EVENT_TARGET, "{event}"),
            routine if routine.is_routine() => debug!(target: EVENT_TARGET, "{event}"),
            _ => info!(target: EVENT_TARGET, "{event}"),
        }
        self.journal.push(JournalEntry {
            turn: self.turn,
            event,
        });
    }

    /// The journal as human-readable lines, one event per line.
    pub fn render_journal(&self) -> String {
        let mut out = String::new();
        for entry in &self.journal {
            out.push_str(&entry.event.to_string());
            out.push('\n');
        }
        out
    }
}
