//! City node with occupancy and per-turn arrival queue.
//!
//! A [`City`] holds its outgoing edges, the alien currently settled in it,
//! and the ordered queue of aliens trying to enter it during the current
//! turn. The queue is filled during movement, drained during collision
//! resolution and cleared at settlement, so it never outlives a turn.

use std::collections::{BTreeMap, VecDeque};

use invasion_types::{AlienId, CityName, Direction};

/// A node in the city graph.
#[derive(Debug, Clone)]
pub struct City {
    /// Unique city name.
    name: CityName,
    /// Outgoing edges keyed by direction label.
    neighbors: BTreeMap<Direction, CityName>,
    /// The alien settled here, if any.
    occupant: Option<AlienId>,
    /// Aliens contending to enter this turn, in arrival order.
    incoming: VecDeque<AlienId>,
    /// Monotonic destruction flag.
    destroyed: bool,
}

impl City {
    /// Create an intact, empty city with no edges.
    pub const fn new(name: CityName) -> Self {
        Self {
            name,
            neighbors: BTreeMap::new(),
            occupant: None,
            incoming: VecDeque::new(),
            destroyed: false,
        }
    }

    /// The city's name.
    pub const fn name(&self) -> &CityName {
        &self.name
    }

    // -------------------------------------------------------------------
    // Edges
    // -------------------------------------------------------------------

    /// Add (or replace) the edge for `direction`.
    pub fn add_neighbor(&mut self, direction: Direction, neighbor: CityName) {
        self.neighbors.insert(direction, neighbor);
    }

    /// All outgoing edges in canonical direction order.
    pub const fn neighbors(&self) -> &BTreeMap<Direction, CityName> {
        &self.neighbors
    }

    /// The neighbor reached by following `direction`, if such an edge exists.
    pub fn neighbor(&self, direction: Direction) -> Option<&CityName> {
        self.neighbors.get(&direction)
    }

    // -------------------------------------------------------------------
    // Occupancy
    // -------------------------------------------------------------------

    /// The alien currently settled here.
    pub const fn occupant(&self) -> Option<AlienId> {
        self.occupant
    }

    /// Settle `alien` here. Does not touch the incoming queue.
    pub const fn occupy(&mut self, alien: AlienId) {
        self.occupant = Some(alien);
    }

    /// Remove whichever alien is settled here.
    pub const fn clear_occupied(&mut self) {
        self.occupant = None;
    }

    /// Remove `alien` if it is the one settled here. Any other occupant
    /// stays.
    pub fn vacate_if(&mut self, alien: AlienId) {
        if self.occupant == Some(alien) {
            self.occupant = None;
        }
    }

    // -------------------------------------------------------------------
    // Incoming queue
    // -------------------------------------------------------------------

    /// Aliens contending for this city this turn, front first.
    pub const fn incoming(&self) -> &VecDeque<AlienId> {
        &self.incoming
    }

    /// Append an arriving alien to the back of the queue.
    pub fn queue(&mut self, alien: AlienId) {
        self.incoming.push_back(alien);
    }

    /// Put a retreating alien at the front of the queue.
    pub fn readmit(&mut self, alien: AlienId) {
        self.incoming.push_front(alien);
    }

    /// Whether more than one alien is contending for this city.
    pub fn aliens_collide(&self) -> bool {
        self.incoming.len() > 1
    }

    /// Empty the queue.
    pub fn clear_incoming(&mut self) {
        self.incoming.clear();
    }

    /// Empty the queue and hand its contents back in arrival order.
    pub fn take_incoming(&mut self) -> Vec<AlienId> {
        self.incoming.drain(..).collect()
    }

    // -------------------------------------------------------------------
    // Destruction
    // -------------------------------------------------------------------

    /// Destroy the city. Idempotent; also evicts any occupant.
    pub const fn destroy(&mut self) {
        self.destroyed = true;
        self.occupant = None;
    }

    /// Whether the city has been destroyed.
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
