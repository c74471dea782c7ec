//! Simulation events.
//!
//! Every observable step of a turn is recorded as an [`InvasionEvent`]. The
//! `Display` form of each event is the human-readable log line; the order in
//! which events are recorded follows the turn phases (movement, collision
//! resolution), so two runs over the same input produce identical journals.

use serde::{Deserialize, Serialize};

use crate::ids::{AlienId, CityName};

/// A single observable occurrence during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvasionEvent {
    /// The alien stays in its city and contends for it this turn.
    AlienWaiting {
        /// The waiting alien.
        alien: AlienId,
        /// The city it waits in.
        city: CityName,
    },
    /// The alien has no viable move left and is grounded for good.
    AlienStuck {
        /// The stuck alien.
        alien: AlienId,
        /// The city it is stuck in.
        city: CityName,
    },
    /// The alien queued itself to enter a neighboring city.
    AlienMoving {
        /// The moving alien.
        alien: AlienId,
        /// Where it comes from.
        from: CityName,
        /// Where it wants to go.
        to: CityName,
    },
    /// Two aliens collided in a city and destroyed it (and themselves).
    CityDestroyed {
        /// The destroyed city.
        city: CityName,
        /// First alien in the city's incoming queue.
        first: AlienId,
        /// Second alien in the city's incoming queue.
        second: AlienId,
    },
    /// A surplus contender was sent back to the city it came from.
    AlienRetreated {
        /// The retreating alien.
        alien: AlienId,
        /// The city it returns to.
        city: CityName,
    },
    /// An alien had to fall back to the city it came from, but that city was
    /// razed earlier in the same turn.
    AlienLost {
        /// The lost alien.
        alien: AlienId,
        /// The city it came from.
        city: CityName,
    },
}

impl InvasionEvent {
    /// Whether the event is routine movement chatter (logged at debug level)
    /// rather than a noteworthy outcome.
    pub const fn is_routine(&self) -> bool {
        matches!(
            self,
            Self::AlienWaiting { .. }
                | Self::AlienStuck { .. }
                | Self::AlienMoving { .. }
                | Self::AlienRetreated { .. }
        )
    }
}

impl core::fmt::Display for InvasionEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlienWaiting { alien, .. } => write!(f, "alien {alien} is waiting"),
            Self::AlienStuck { alien, .. } => write!(f, "alien {alien} is being stuck"),
            Self::AlienMoving { alien, from, to } => {
                write!(f, "alien {alien} tries to move from {from} to {to}")
            }
            Self::CityDestroyed {
                city,
                first,
                second,
            } => write!(
                f,
                "{city} has been destroyed by alien {first} and alien {second}!"
            ),
            Self::AlienRetreated { alien, city } => write!(
                f,
                "alien {alien} reporting! mad aliens already fighting! going back to {city}"
            ),
            Self::AlienLost { alien, city } => {
                write!(f, "alien {alien} returned to the ruins of {city} and perished")
            }
        }
    }
}

/// An event stamped with the turn it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// One-based turn number.
    pub turn: u64,
    /// What happened.
    #[serde(flatten)]
    pub event: InvasionEvent,
}
