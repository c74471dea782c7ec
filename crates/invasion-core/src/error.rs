//! Error types for world construction.
//!
//! [`BuildError`] covers everything that can go wrong between reading the
//! inputs and handing a ready [`World`](crate::world::World) to the runner.
//! Once a world is built, running it cannot fail.

use invasion_agents::AgentError;
use invasion_types::{AlienId, CityName};
use invasion_world::WorldError;

/// Errors that can occur while assembling a world.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// There are more aliens than cities to start them in.
    #[error("number of aliens ({aliens}) cannot exceed number of cities ({cities})")]
    MoreAliensThanCities {
        /// Number of aliens supplied.
        aliens: usize,
        /// Number of cities in the graph.
        cities: usize,
    },

    /// An alien starts in a city that is not part of the graph.
    #[error("non existing city {city} for alien {alien}")]
    UnknownStartCity {
        /// The misplaced alien.
        alien: AlienId,
        /// The missing city.
        city: CityName,
    },

    /// Two aliens share an id.
    #[error("duplicate alien id: {0}")]
    DuplicateAlien(AlienId),

    /// Two aliens would start in the same city.
    #[error("alien {alien} cannot start in {city}: already taken")]
    StartCityTaken {
        /// The second alien claiming the city.
        alien: AlienId,
        /// The contested city.
        city: CityName,
    },

    /// The city graph could not be built.
    #[error("city error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The aliens could not be created.
    #[error("alien error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },
}
