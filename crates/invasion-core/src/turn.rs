//! One turn of the invasion.
//!
//! Each turn runs three phases in order:
//!
//! 1. **Movement** -- every live alien with budget left asks its policy for
//!    a heading, in ascending id order, and queues itself at its target.
//!
//! 2. **Collisions** -- repeated passes over the standing cities, most
//!    contended first. In a city where two or more aliens queued, the first
//!    two kill each other and raze the city; the rest are sent back to the
//!    front of their origin's queue, where they may start a new collision.
//!    Passes continue until no standing city has more than one alien queued.
//!
//! 3. **Settlement** -- the one alien left in each standing city's queue
//!    occupies it and is rebound to it. An alien that walked into a city
//!    razed on an earlier turn is dropped from the ruins and stays, unsettled,
//!    bound to the city it left.
//!
//! A turn is deterministic given the world state and the policies' seeds.

use invasion_types::{AlienId, CityName, InvasionEvent};
use tracing::debug;

use crate::world::World;

/// Summary of one executed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    /// The turn number that was executed.
    pub turn: u64,
    /// Events recorded during the turn, in order.
    pub events: Vec<InvasionEvent>,
    /// Cities destroyed during the turn.
    pub destroyed: Vec<CityName>,
    /// Aliens neither dead nor stuck at the end of the turn.
    pub aliens_active: usize,
}

/// Execute one full turn against the world.
pub fn run_turn(world: &mut World) -> TurnSummary {
    world.turn = world.turn.saturating_add(1);
    let first_entry = world.journal.len();

    // --- Phase 1: Movement ---
    phase_movement(world);

    // --- Phase 2: Collisions ---
    let destroyed = phase_collisions(world);

    // --- Phase 3: Settlement ---
    phase_settlement(world);

    let events: Vec<InvasionEvent> = world
        .journal
        .get(first_entry..)
        .unwrap_or_default()
        .iter()
        .map(|entry| entry.event.clone())
        .collect();

    let summary = TurnSummary {
        turn: world.turn,
        events,
        destroyed,
        aliens_active: world.active_count(),
    };

    debug!(
        turn = summary.turn,
        events = summary.events.len(),
        destroyed = summary.destroyed.len(),
        aliens_active = summary.aliens_active,
        "Turn complete"
    );

    summary
}

// ---------------------------------------------------------------------------
// Phase 1: Movement
// ---------------------------------------------------------------------------

fn phase_movement(world: &mut World) {
    let max_iterations = world.max_iterations;
    let ids: Vec<AlienId> = world.aliens.keys().copied().collect();

    for id in ids {
        let Some(alien) = world.aliens.get_mut(&id) else {
            continue;
        };
        if !alien.is_active() || alien.iteration() >= max_iterations {
            continue;
        }
        let event = alien.make_move(&mut world.cities);
        world.record(event);
    }
}

// ---------------------------------------------------------------------------
// Phase 2: Collisions
// ---------------------------------------------------------------------------

fn phase_collisions(world: &mut World) -> Vec<CityName> {
    let mut destroyed = Vec::new();

    // Every pass razes at least one city, so this terminates.
    while world.cities.any_collision() {
        for name in world.cities.by_contention() {
            let contenders = match world.cities.get_mut(name.as_str()) {
                Some(city) if !city.is_destroyed() && city.aliens_collide() => {
                    city.take_incoming()
                }
                _ => continue,
            };
            resolve_collision(world, &name, contenders);
            destroyed.push(name);
        }
    }

    destroyed
}

/// Raze `city`, kill its first two contenders and send the rest home.
fn resolve_collision(world: &mut World, city: &CityName, contenders: Vec<AlienId>) {
    let mut queue = contenders.into_iter();
    let (Some(first), Some(second)) = (queue.next(), queue.next()) else {
        return;
    };

    if let Some(ruins) = world.cities.get_mut(city.as_str()) {
        ruins.destroy();
    }
    for id in [first, second] {
        if let Some(alien) = world.aliens.get_mut(&id) {
            alien.kill(&mut world.cities);
        }
    }
    world.record(InvasionEvent::CityDestroyed {
        city: city.clone(),
        first,
        second,
    });

    for id in queue {
        if let Some(alien) = world.aliens.get_mut(&id) {
            let event = alien.go_back(&mut world.cities);
            world.record(event);
        }
    }
}

// ---------------------------------------------------------------------------
// Phase 3: Settlement
// ---------------------------------------------------------------------------

fn phase_settlement(world: &mut World) {
    let mut settled: Vec<(AlienId, CityName)> = Vec::new();
    let mut stranded: Vec<AlienId> = Vec::new();

    for city in world.cities.cities_mut() {
        if city.is_destroyed() {
            stranded.extend(city.take_incoming());
            continue;
        }
        debug_assert!(
            city.incoming().len() <= 1,
            "unresolved collision in {}",
            city.name()
        );
        if let Some(&front) = city.incoming().front() {
            city.occupy(front);
            city.clear_incoming();
            settled.push((front, city.name().clone()));
        }
    }

    for (id, city) in settled {
        if let Some(alien) = world.aliens.get_mut(&id) {
            alien.settle(city);
        }
    }

    // An alien that walked into ruins stays bound to the city it left. It
    // only has nowhere to stand if that city fell this turn as well.
    for id in stranded {
        let Some(alien) = world.aliens.get_mut(&id) else {
            continue;
        };
        if !world.cities.is_destroyed(alien.origin().as_str()) {
            continue;
        }
        let event = alien.go_back(&mut world.cities);
        world.record(event);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use invasion_agents::{Alien, ScriptedPolicy};
    use invasion_types::Direction;
    use invasion_world::CityMap;

    use super::*;

    fn scripted(id: u32, origin: &str, steps: &[Direction]) -> Alien {
        Alien::new(
            AlienId::new(id),
            CityName::from(origin),
            Box::new(ScriptedPolicy::new(steps.iter().copied())),
        )
    }

    fn make_world(cities: &str, aliens: Vec<Alien>) -> World {
        let map: CityMap = invasion_world::parse_cities(cities).unwrap();
        World::new(map, aliens, 100).unwrap()
    }

    #[test]
    fn movement_settles_in_target() {
        let mut world = make_world(
            "Foo east=Bar\nBar west=Foo\n",
            vec![scripted(1, "Foo", &[Direction::East])],
        );

        let summary = run_turn(&mut world);

        assert_eq!(summary.turn, 1);
        assert!(summary.destroyed.is_empty());
        let alien = world.alien(AlienId::new(1)).unwrap();
        assert_eq!(alien.origin(), &CityName::from("Bar"));
        assert_eq!(alien.iteration(), 1);
        let bar = world.cities().get("Bar").unwrap();
        assert_eq!(bar.occupant(), Some(AlienId::new(1)));
        assert!(bar.incoming().is_empty());
        assert_eq!(world.cities().get("Foo").unwrap().occupant(), None);
    }

    #[test]
    fn waiting_alien_keeps_its_city() {
        let mut world = make_world(
            "Foo east=Bar\nBar west=Foo\n",
            vec![scripted(1, "Foo", &[Direction::Wait])],
        );

        let summary = run_turn(&mut world);

        assert_eq!(summary.events.len(), 1);
        assert_eq!(
            world.cities().get("Foo").unwrap().occupant(),
            Some(AlienId::new(1))
        );
    }

    #[test]
    fn collision_razes_city_and_kills_both() {
        let mut world = make_world(
            "Foo east=Bar\nBar west=Foo\n",
            vec![
                scripted(1, "Foo", &[Direction::East]),
                scripted(2, "Bar", &[Direction::Wait]),
            ],
        );

        let summary = run_turn(&mut world);

        assert_eq!(summary.destroyed, vec![CityName::from("Bar")]);
        assert_eq!(summary.aliens_active, 0);
        assert!(world.cities().is_destroyed("Bar"));
        assert!(world.aliens().all(Alien::is_dead));
        assert_eq!(world.cities().get("Foo").unwrap().occupant(), None);
    }

    #[test]
    fn walking_into_ruins_leaves_alien_where_it_was() {
        let mut world = make_world(
            "Foo east=Bar\nBar west=Foo\n",
            vec![scripted(1, "Foo", &[Direction::East, Direction::East])],
        );
        if let Some(bar) = world.cities.get_mut("Bar") {
            bar.destroy();
        }

        let summary = run_turn(&mut world);

        assert_eq!(
            summary.events,
            vec![InvasionEvent::AlienMoving {
                alien: AlienId::new(1),
                from: CityName::from("Foo"),
                to: CityName::from("Bar"),
            }]
        );
        let alien = world.alien(AlienId::new(1)).unwrap();
        assert!(alien.is_active());
        assert_eq!(alien.origin(), &CityName::from("Foo"));
        assert!(world.cities().get("Bar").unwrap().incoming().is_empty());
        assert_eq!(world.cities().get("Foo").unwrap().occupant(), None);

        let again = run_turn(&mut world);
        assert_eq!(again.events.len(), 1);
        assert_eq!(world.alien(AlienId::new(1)).unwrap().iteration(), 2);
    }

    #[test]
    fn stranded_alien_whose_home_fell_is_lost() {
        // Alien 1 walks into old ruins while 2 and 3 raze Foo behind it.
        let mut world = make_world(
            "Foo east=Bar\nBar west=Foo\nBaz west=Foo\nQux north=Foo\n",
            vec![
                scripted(1, "Foo", &[Direction::East]),
                scripted(2, "Baz", &[Direction::West]),
                scripted(3, "Qux", &[Direction::North]),
            ],
        );
        if let Some(bar) = world.cities.get_mut("Bar") {
            bar.destroy();
        }

        let summary = run_turn(&mut world);

        assert_eq!(summary.destroyed, vec![CityName::from("Foo")]);
        assert_eq!(
            summary.events.last(),
            Some(&InvasionEvent::AlienLost {
                alien: AlienId::new(1),
                city: CityName::from("Foo"),
            })
        );
        assert!(world.aliens().all(Alien::is_dead));
    }

    #[test]
    fn capped_alien_sits_still() {
        let map = invasion_world::parse_cities("Foo east=Bar\nBar west=Foo\n").unwrap();
        let mut world = World::new(
            map,
            vec![scripted(1, "Foo", &[Direction::East, Direction::West])],
            1,
        )
        .unwrap();

        run_turn(&mut world);
        let summary = run_turn(&mut world);

        assert!(summary.events.is_empty());
        assert_eq!(world.alien(AlienId::new(1)).unwrap().iteration(), 1);
        assert_eq!(
            world.cities().get("Bar").unwrap().occupant(),
            Some(AlienId::new(1))
        );
    }
}
