//! Strongly-typed identifiers for aliens and cities.
//!
//! Aliens are numbered (the input files name them with integers) and cities
//! are keyed by their textual name. Keeping both behind newtypes prevents a
//! city name from being used where an alien id is expected and vice versa.

use serde::{Deserialize, Serialize};

/// Unique identifier for an alien.
///
/// Ordering is significant: the movement phase walks aliens in ascending
/// id order, which is the deterministic tie-break for queue arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlienId(pub u32);

impl AlienId {
    /// Create an identifier from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Return the inner numeric value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for AlienId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AlienId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl core::str::FromStr for AlienId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Unique name of a city (node in the city graph).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Create a city name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CityName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for CityName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl core::borrow::Borrow<str> for CityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
