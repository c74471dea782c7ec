//! City graph: cities as nodes, labeled directed edges between them.
//!
//! The [`CityMap`] is an arena of [`City`] values keyed by [`CityName`].
//! Edges are stored inside each city as name lookups rather than references,
//! so the (usually cyclic) graph has a single owner.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use invasion_types::{CityName, Direction};

use crate::city::City;

/// The graph holding every city of the simulation.
#[derive(Debug, Clone, Default)]
pub struct CityMap {
    /// All cities indexed by name.
    cities: BTreeMap<CityName, City>,
}

impl CityMap {
    /// Create an empty map.
    pub const fn new() -> Self {
        Self {
            cities: BTreeMap::new(),
        }
    }

    // -------------------------------------------------------------------
    // City operations
    // -------------------------------------------------------------------

    /// Return the city with this name, creating an edgeless one if absent.
    pub fn ensure_city(&mut self, name: &CityName) -> &mut City {
        self.cities
            .entry(name.clone())
            .or_insert_with(|| City::new(name.clone()))
    }

    /// Add a directed edge `from --direction--> to`, creating either
    /// endpoint if it does not exist yet.
    pub fn add_road(&mut self, from: &CityName, direction: Direction, to: &CityName) {
        self.ensure_city(to);
        self.ensure_city(from).add_neighbor(direction, to.clone());
    }

    /// Get an immutable reference to a city.
    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Get a mutable reference to a city.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    /// Whether a city with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// Number of cities, destroyed ones included.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of cities still standing.
    pub fn surviving_count(&self) -> usize {
        self.cities.values().filter(|c| !c.is_destroyed()).count()
    }

    /// All city names in ascending order.
    pub fn names(&self) -> Vec<CityName> {
        self.cities.keys().cloned().collect()
    }

    /// Iterate over all cities immutably, in name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// Iterate over all cities mutably, in name order.
    pub fn cities_mut(&mut self) -> impl Iterator<Item = &mut City> {
        self.cities.values_mut()
    }

    // -------------------------------------------------------------------
    // Graph queries
    // -------------------------------------------------------------------

    /// Whether the named city exists and is destroyed.
    pub fn is_destroyed(&self, name: &str) -> bool {
        self.cities.get(name).is_some_and(City::is_destroyed)
    }

    /// Labels of the edges leaving `name` whose target still stands.
    ///
    /// Returned in canonical direction order. Unknown cities have none.
    pub fn viable_directions(&self, name: &str) -> Vec<Direction> {
        let Some(city) = self.cities.get(name) else {
            return Vec::new();
        };
        city.neighbors()
            .iter()
            .filter(|(_, target)| !self.is_destroyed(target.as_str()))
            .map(|(direction, _)| *direction)
            .collect()
    }

    /// Whether any standing city has more than one alien queued.
    pub fn any_collision(&self) -> bool {
        self.cities
            .values()
            .any(|c| !c.is_destroyed() && c.aliens_collide())
    }

    /// Names of the standing cities ordered by queue length, longest first.
    ///
    /// Ties keep name order.
    pub fn by_contention(&self) -> Vec<CityName> {
        let mut standing: Vec<&City> = self.cities.values().filter(|c| !c.is_destroyed()).collect();
        standing.sort_by_key(|c| core::cmp::Reverse(c.incoming().len()));
        standing.into_iter().map(|c| c.name().clone()).collect()
    }

    // -------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------

    /// Render the standing part of the map in the city-file format.
    ///
    /// Destroyed cities are omitted, as are edges leading into them.
    pub fn render_survivors(&self) -> String {
        let mut out = String::new();
        for city in self.cities.values().filter(|c| !c.is_destroyed()) {
            out.push_str(city.name().as_str());
            for (direction, target) in city.neighbors() {
                if self.is_destroyed(target.as_str()) {
                    continue;
                }
                // Writing into a String cannot fail.
                let _ = write!(out, " {direction}={target}");
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> CityName {
        CityName::from(s)
    }

    fn make_triangle() -> CityMap {
        let mut map = CityMap::new();
        map.add_road(&name("Foo"), Direction::North, &name("Bar"));
        map.add_road(&name("Foo"), Direction::West, &name("Baz"));
        map.add_road(&name("Bar"), Direction::South, &name("Foo"));
        map.add_road(&name("Baz"), Direction::East, &name("Foo"));
        map
    }

    #[test]
    fn roads_create_missing_endpoints() {
        let mut map = CityMap::new();
        map.add_road(&name("Foo"), Direction::North, &name("Bar"));
        assert_eq!(map.city_count(), 2);
        assert!(map.get("Bar").is_some_and(|c| c.neighbors().is_empty()));
    }

    #[test]
    fn viable_directions_skip_destroyed_targets() {
        let mut map = make_triangle();
        assert_eq!(
            map.viable_directions("Foo"),
            vec![Direction::North, Direction::West]
        );
        if let Some(bar) = map.get_mut("Bar") {
            bar.destroy();
        }
        assert_eq!(map.viable_directions("Foo"), vec![Direction::West]);
        assert!(map.viable_directions("Nowhere").is_empty());
    }

    #[test]
    fn contention_order_longest_first() {
        let mut map = make_triangle();
        if let Some(baz) = map.get_mut("Baz") {
            baz.queue(invasion_types::AlienId::new(1));
            baz.queue(invasion_types::AlienId::new(2));
        }
        if let Some(bar) = map.get_mut("Bar") {
            bar.queue(invasion_types::AlienId::new(3));
        }
        assert_eq!(map.by_contention(), vec![name("Baz"), name("Bar"), name("Foo")]);
        assert!(map.any_collision());
    }

    #[test]
    fn destroyed_collisions_are_ignored() {
        let mut map = make_triangle();
        if let Some(baz) = map.get_mut("Baz") {
            baz.queue(invasion_types::AlienId::new(1));
            baz.queue(invasion_types::AlienId::new(2));
            baz.destroy();
        }
        assert!(!map.any_collision());
        assert!(!map.by_contention().contains(&name("Baz")));
    }

    #[test]
    fn render_drops_destroyed_cities_and_edges() {
        let mut map = make_triangle();
        if let Some(bar) = map.get_mut("Bar") {
            bar.destroy();
        }
        assert_eq!(map.render_survivors(), "Baz east=Foo\nFoo west=Baz\n");
        assert_eq!(map.surviving_count(), 2);
    }
}
