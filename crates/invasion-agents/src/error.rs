//! Error types for the invasion-agents crate.
//!
//! Everything here is an input-validation failure raised while aliens are
//! being created. Runtime invariant violations (a policy naming an edge the
//! city does not have) are defects and panic instead.

use invasion_types::{AlienId, CityName};

/// Errors that can occur while creating or placing aliens.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// An alien line did not start with `id=city`.
    #[error("wrong aliens format on line {line}: {token}")]
    MalformedAlien {
        /// One-based line number in the alien description.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The alien id is not a non-negative integer.
    #[error("invalid alien id on line {line}: {token}")]
    InvalidAlienId {
        /// One-based line number in the alien description.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The alien's starting city is not part of the graph.
    #[error("non existing city {city}")]
    UnknownStartCity {
        /// One-based line number in the alien description.
        line: usize,
        /// The missing city.
        city: CityName,
    },

    /// A scripted step used a label outside the direction vocabulary.
    #[error("wrong alien direction format on line {line}: {label}")]
    UnknownDirection {
        /// One-based line number in the alien description.
        line: usize,
        /// The offending label.
        label: String,
    },

    /// Two aliens share an id.
    #[error("duplicate alien id: {0}")]
    DuplicateAlien(AlienId),

    /// The requested number of random aliens is zero or exceeds the number
    /// of cities available to place them on.
    #[error("cannot place {requested} aliens on {available} cities")]
    AlienCountOutOfRange {
        /// Requested number of aliens.
        requested: usize,
        /// Number of cities available.
        available: usize,
    },

    /// Failed to read an alien file from disk.
    #[error("failed to read alien file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
