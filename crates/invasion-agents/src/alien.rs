//! Alien state and the per-turn alien operations.
//!
//! An [`Alien`] is bound to the city it last settled in (its `origin`), counts
//! the moves it has made, and owns the [`DirectionPolicy`] that steers it.
//! Moving never changes `origin` directly: the alien only queues itself at
//! its target, and the world rebinds it during settlement.
//!
//! `dead` and `stuck` are both terminal and mutually exclusive.

use invasion_types::{AlienId, CityName, Direction, Heading, InvasionEvent};
use invasion_world::CityMap;

use crate::policy::DirectionPolicy;

/// A mobile agent roaming the city graph.
#[derive(Debug)]
pub struct Alien {
    /// Unique alien id.
    id: AlienId,
    /// The city the alien last settled in.
    origin: CityName,
    /// Number of moves made so far.
    iteration: u32,
    /// Killed in a collision.
    dead: bool,
    /// Grounded for lack of viable moves.
    stuck: bool,
    /// Source of headings.
    policy: Box<dyn DirectionPolicy>,
}

impl Alien {
    /// Create a live alien starting in `origin`.
    pub const fn new(id: AlienId, origin: CityName, policy: Box<dyn DirectionPolicy>) -> Self {
        Self {
            id,
            origin,
            iteration: 0,
            dead: false,
            stuck: false,
            policy,
        }
    }

    /// The alien's id.
    pub const fn id(&self) -> AlienId {
        self.id
    }

    /// The city the alien last settled in.
    pub const fn origin(&self) -> &CityName {
        &self.origin
    }

    /// Number of moves made so far.
    pub const fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Whether the alien died in a collision.
    pub const fn is_dead(&self) -> bool {
        self.dead
    }

    /// Whether the alien is grounded for good.
    pub const fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Neither dead nor stuck.
    pub const fn is_active(&self) -> bool {
        !self.dead && !self.stuck
    }

    /// Rebind the alien to the city it just settled in.
    pub fn settle(&mut self, city: CityName) {
        self.origin = city;
    }

    /// Make one move: ask the policy for a heading and act on it.
    ///
    /// Waiting re-queues the alien into its own city and a stuck heading
    /// grounds it. Any other heading queues the alien at the neighbor reached
    /// by that edge. Moving or waiting gives up the origin's occupancy if the
    /// alien still holds it.
    ///
    /// # Panics
    ///
    /// Panics if the origin is missing from the map or the heading names an
    /// edge the origin does not have. Neither can happen with well-formed
    /// state: both policies only report edges of the current city.
    #[allow(clippy::panic)]
    pub fn make_move(&mut self, cities: &mut CityMap) -> InvasionEvent {
        self.iteration = self.iteration.saturating_add(1);
        let heading = self.policy.direction(&self.origin, cities);

        let Some(origin) = cities.get_mut(self.origin.as_str()) else {
            panic!("alien {} is bound to unknown city {}", self.id, self.origin);
        };

        match heading {
            Heading::Stuck => {
                self.stuck = true;
                InvasionEvent::AlienStuck {
                    alien: self.id,
                    city: self.origin.clone(),
                }
            }
            Heading::Toward(Direction::Wait) => {
                origin.vacate_if(self.id);
                origin.queue(self.id);
                InvasionEvent::AlienWaiting {
                    alien: self.id,
                    city: self.origin.clone(),
                }
            }
            Heading::Toward(direction) => {
                let Some(next) = origin.neighbor(direction).cloned() else {
                    panic!(
                        "non existing neighbor for city {} and direction {direction}",
                        self.origin
                    );
                };
                origin.vacate_if(self.id);
                let Some(target) = cities.get_mut(next.as_str()) else {
                    panic!("edge from {} leads to unknown city {next}", self.origin);
                };
                target.queue(self.id);
                InvasionEvent::AlienMoving {
                    alien: self.id,
                    from: self.origin.clone(),
                    to: next,
                }
            }
        }
    }

    /// Kill the alien and vacate the city it last settled in, unless some
    /// other alien has settled there since.
    pub fn kill(&mut self, cities: &mut CityMap) {
        self.dead = true;
        if let Some(origin) = cities.get_mut(self.origin.as_str()) {
            origin.vacate_if(self.id);
        }
    }

    /// Send a surplus contender back to the front of its origin's queue.
    ///
    /// If the origin was destroyed earlier in the same turn there is nothing
    /// to return to and the alien dies in the ruins.
    pub fn go_back(&mut self, cities: &mut CityMap) -> InvasionEvent {
        match cities.get_mut(self.origin.as_str()) {
            Some(origin) if !origin.is_destroyed() => {
                origin.readmit(self.id);
                InvasionEvent::AlienRetreated {
                    alien: self.id,
                    city: self.origin.clone(),
                }
            }
            _ => {
                self.dead = true;
                InvasionEvent::AlienLost {
                    alien: self.id,
                    city: self.origin.clone(),
                }
            }
        }
    }
}
