//! Enumeration types shared across the invasion workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// A labeled edge direction in the city graph.
///
/// The vocabulary is fixed. [`Direction::Wait`] is the self-referential
/// edge: an alien heading `Wait` stays in its own city but still contends
/// for it during the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Edge labeled `north`.
    North,
    /// Edge labeled `south`.
    South,
    /// Edge labeled `east`.
    East,
    /// Edge labeled `west`.
    West,
    /// Edge labeled `wait`.
    Wait,
}

impl Direction {
    /// Every direction in canonical order.
    pub const ALL: [Self; 5] = [Self::North, Self::South, Self::East, Self::West, Self::Wait];

    /// The lower-case label used in input files and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Wait => "wait",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A direction label outside the allowed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction label: {0}")]
pub struct UnknownDirection(pub String);

impl core::str::FromStr for Direction {
    type Err = UnknownDirection;

    /// Parse a label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Policy output
// ---------------------------------------------------------------------------

/// What a direction policy tells an alien to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Follow the edge with this label. `Toward(Direction::Wait)` means stay
    /// put and contend for the current city.
    Toward(Direction),
    /// No viable move exists; the alien is grounded for good.
    Stuck,
}

// ---------------------------------------------------------------------------
// Termination
// ---------------------------------------------------------------------------

/// Reason the simulation loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The world was built without any aliens.
    NoAliens,
    /// Every alien is either dead or stuck.
    AllDeadOrStuck,
    /// Every remaining alien has used up its move budget.
    AllReachedMaxIterations,
}

impl core::fmt::Display for EndReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoAliens => f.write_str("no aliens provided"),
            Self::AllDeadOrStuck => f.write_str("all aliens are dead or stuck"),
            Self::AllReachedMaxIterations => {
                f.write_str("all aliens have reached max iterations")
            }
        }
    }
}
