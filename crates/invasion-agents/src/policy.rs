//! Direction policies.
//!
//! Each turn an alien asks its [`DirectionPolicy`] where to go. The answer is
//! a [`Heading`]: an edge label to follow (`wait` included) or
//! [`Heading::Stuck`], which grounds the alien permanently.
//!
//! Two policies exist:
//!
//! - [`ScriptedPolicy`] replays a fixed list of labels, then reports stuck.
//! - [`RandomPolicy`] picks uniformly among edges whose target still stands,
//!   using its own seeded RNG so a run is reproducible.

use std::collections::VecDeque;

use invasion_types::{CityName, Direction, Heading};
use invasion_world::CityMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of headings for one alien.
///
/// Implementations must only name edges present on `origin`; anything else
/// is treated as corrupt state by the caller.
pub trait DirectionPolicy: core::fmt::Debug {
    /// Choose the heading for the alien currently in `origin`.
    fn direction(&mut self, origin: &CityName, cities: &CityMap) -> Heading;
}

/// Replays a pre-supplied sequence of labels front to back.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    /// Labels not consumed yet.
    remaining: VecDeque<Direction>,
}

impl ScriptedPolicy {
    /// Create a policy that will replay `directions` in order.
    pub fn new(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            remaining: directions.into_iter().collect(),
        }
    }

    /// Number of labels still to be replayed.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl DirectionPolicy for ScriptedPolicy {
    fn direction(&mut self, _origin: &CityName, _cities: &CityMap) -> Heading {
        self.remaining
            .pop_front()
            .map_or(Heading::Stuck, Heading::Toward)
    }
}

/// Picks uniformly among edges leading to standing cities.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    /// Per-alien generator.
    rng: StdRng,
}

impl RandomPolicy {
    /// Create a policy seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DirectionPolicy for RandomPolicy {
    fn direction(&mut self, origin: &CityName, cities: &CityMap) -> Heading {
        let viable = cities.viable_directions(origin.as_str());
        if viable.is_empty() {
            return Heading::Stuck;
        }
        let idx = self.rng.random_range(0..viable.len());
        viable
            .get(idx)
            .copied()
            .map_or(Heading::Stuck, Heading::Toward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> CityName {
        CityName::from(s)
    }

    fn make_star() -> CityMap {
        let mut map = CityMap::new();
        map.add_road(&name("Hub"), Direction::North, &name("N"));
        map.add_road(&name("Hub"), Direction::South, &name("S"));
        map.add_road(&name("Hub"), Direction::East, &name("E"));
        map
    }

    #[test]
    fn scripted_replays_then_sticks() {
        let map = make_star();
        let mut policy = ScriptedPolicy::new([Direction::North, Direction::Wait]);
        assert_eq!(policy.direction(&name("Hub"), &map), Heading::Toward(Direction::North));
        assert_eq!(policy.direction(&name("Hub"), &map), Heading::Toward(Direction::Wait));
        assert_eq!(policy.direction(&name("Hub"), &map), Heading::Stuck);
        assert_eq!(policy.direction(&name("Hub"), &map), Heading::Stuck);
        assert_eq!(policy.remaining(), 0);
    }

    #[test]
    fn random_only_picks_standing_targets() {
        let mut map = make_star();
        if let Some(n) = map.get_mut("N") {
            n.destroy();
        }
        if let Some(s) = map.get_mut("S") {
            s.destroy();
        }
        let mut policy = RandomPolicy::new(7);
        for _ in 0..50 {
            assert_eq!(
                policy.direction(&name("Hub"), &map),
                Heading::Toward(Direction::East)
            );
        }
    }

    #[test]
    fn random_sticks_without_viable_edges() {
        let mut map = make_star();
        for city in ["N", "S", "E"] {
            if let Some(c) = map.get_mut(city) {
                c.destroy();
            }
        }
        let mut policy = RandomPolicy::new(7);
        assert_eq!(policy.direction(&name("Hub"), &map), Heading::Stuck);
        // A dead end is stuck too.
        assert_eq!(policy.direction(&name("N"), &map), Heading::Stuck);
    }

    #[test]
    fn random_is_reproducible_from_seed() {
        let map = make_star();
        let mut a = RandomPolicy::new(99);
        let mut b = RandomPolicy::new(99);
        for _ in 0..20 {
            assert_eq!(
                a.direction(&name("Hub"), &map),
                b.direction(&name("Hub"), &map)
            );
        }
    }

    #[test]
    fn random_eventually_uses_every_edge() {
        let map = make_star();
        let mut policy = RandomPolicy::new(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            if let Heading::Toward(d) = policy.direction(&name("Hub"), &map) {
                seen.insert(d);
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
