//! Shared type definitions for the alien invasion simulation.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifiers for aliens and cities
//! - [`enums`] -- Direction vocabulary, policy headings, end reasons
//! - [`events`] -- Journal events emitted by the turn loop

pub mod enums;
pub mod events;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use enums::{Direction, EndReason, Heading, UnknownDirection};
pub use events::{InvasionEvent, JournalEntry};
pub use ids::{AlienId, CityName};
