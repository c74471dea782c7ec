//! Random alien placement.
//!
//! Creates `count` aliens numbered `1..=count`, drops each one on a distinct
//! city drawn uniformly from the cities not yet taken, and gives each its own
//! [`RandomPolicy`] seeded from the caller's generator. One master seed
//! therefore reproduces the whole run.

use invasion_types::AlienId;
use invasion_world::CityMap;
use rand::Rng;
use tracing::debug;

use crate::alien::Alien;
use crate::error::AgentError;
use crate::policy::RandomPolicy;

/// Place `count` randomly-steered aliens on distinct cities.
///
/// # Errors
///
/// Returns [`AgentError::AlienCountOutOfRange`] if `count` is zero or larger
/// than the number of cities.
pub fn spawn_random_aliens<R: Rng>(
    count: usize,
    cities: &CityMap,
    rng: &mut R,
) -> Result<Vec<Alien>, AgentError> {
    let mut candidates = cities.names();
    if count == 0 || count > candidates.len() {
        return Err(AgentError::AlienCountOutOfRange {
            requested: count,
            available: candidates.len(),
        });
    }
    let last_id = u32::try_from(count).map_err(|_too_many| AgentError::AlienCountOutOfRange {
        requested: count,
        available: candidates.len(),
    })?;

    let mut aliens = Vec::with_capacity(count);
    for raw_id in 1..=last_id {
        // Every remaining candidate is eligible, the last one included.
        let idx = rng.random_range(0..candidates.len());
        let city = candidates.remove(idx);
        let id = AlienId::new(raw_id);

        debug!(alien = %id, city = %city, "Alien landed");
        aliens.push(Alien::new(id, city, Box::new(RandomPolicy::new(rng.random()))));
    }

    Ok(aliens)
}
