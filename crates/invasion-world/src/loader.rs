//! City-file parsing.
//!
//! The format is one city per line:
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! The first token names the city, every further token is a
//! `direction=neighbor` edge. Direction labels are case-insensitive and must
//! belong to the [`Direction`] vocabulary. Blank lines are skipped, a city
//! declared twice accumulates the edges of both lines, and a city that only
//! ever appears as a neighbor still becomes an (edgeless) node.

use std::path::Path;

use invasion_types::{CityName, Direction};
use tracing::debug;

use crate::city_map::CityMap;
use crate::error::WorldError;

/// Parse a city description into a [`CityMap`].
///
/// # Errors
///
/// Returns [`WorldError::MalformedEdge`] for a token that is not exactly
/// `direction=neighbor`, or [`WorldError::UnknownDirection`] for a label
/// outside the vocabulary.
pub fn parse_cities(text: &str) -> Result<CityMap, WorldError> {
    let mut map = CityMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index.saturating_add(1);
        let mut tokens = raw.split_whitespace();
        let Some(city_token) = tokens.next() else {
            continue;
        };
        let city = CityName::from(city_token);
        map.ensure_city(&city);

        for token in tokens {
            let (label, neighbor) = split_edge(token).ok_or_else(|| WorldError::MalformedEdge {
                line,
                token: token.to_owned(),
            })?;
            let direction: Direction =
                label
                    .parse()
                    .map_err(|_unknown| WorldError::UnknownDirection {
                        line,
                        label: label.to_owned(),
                    })?;
            map.add_road(&city, direction, &CityName::from(neighbor));
        }
    }

    debug!(cities = map.city_count(), "City graph parsed");
    Ok(map)
}

/// Read and parse a city file.
///
/// # Errors
///
/// Returns [`WorldError::Io`] if the file cannot be read, or any error of
/// [`parse_cities`].
pub fn load_cities(path: &Path) -> Result<CityMap, WorldError> {
    let text = std::fs::read_to_string(path)?;
    parse_cities(&text)
}

/// Split `label=neighbor`, rejecting empty halves and extra `=` signs.
fn split_edge(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.split('=');
    let label = parts.next()?;
    let neighbor = parts.next()?;
    if parts.next().is_some() || label.is_empty() || neighbor.is_empty() {
        return None;
    }
    Some((label, neighbor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_and_implicit_cities() {
        let map = parse_cities("Foo north=Bar west=Baz\nBar south=Foo\n");
        assert!(map.is_ok());
        let map = map.unwrap_or_default();
        assert_eq!(map.city_count(), 3);
        let foo = map.get("Foo");
        assert_eq!(
            foo.and_then(|c| c.neighbor(Direction::West)).map(CityName::as_str),
            Some("Baz")
        );
        assert!(map.get("Baz").is_some_and(|c| c.neighbors().is_empty()));
    }

    #[test]
    fn labels_are_case_insensitive() {
        let map = parse_cities("Foo NORTH=Bar East=Baz").unwrap_or_default();
        let foo = map.get("Foo");
        assert!(foo.and_then(|c| c.neighbor(Direction::North)).is_some());
        assert!(foo.and_then(|c| c.neighbor(Direction::East)).is_some());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let map = parse_cities("\nFoo north=Bar\n\n   \nBar south=Foo\n").unwrap_or_default();
        assert_eq!(map.city_count(), 2);
    }

    #[test]
    fn repeated_declarations_merge() {
        let map = parse_cities("Foo north=Bar\nFoo south=Baz\n").unwrap_or_default();
        assert_eq!(map.get("Foo").map(|c| c.neighbors().len()), Some(2));
    }

    #[test]
    fn lone_city_has_no_edges() {
        let map = parse_cities("Solitude\n").unwrap_or_default();
        assert_eq!(map.city_count(), 1);
    }

    #[test]
    fn wait_edge_is_accepted() {
        let map = parse_cities("Foo wait=Foo north=Bar").unwrap_or_default();
        assert!(map.get("Foo").and_then(|c| c.neighbor(Direction::Wait)).is_some());
    }

    #[test]
    fn unknown_direction_is_a_format_error() {
        let result = parse_cities("Foo north=Bar\nBar up=Foo\n");
        assert!(matches!(
            result,
            Err(WorldError::UnknownDirection { line: 2, ref label }) if label == "up"
        ));
    }

    #[test]
    fn malformed_edge_is_a_format_error() {
        for text in ["Foo north", "Foo north=Bar=Baz", "Foo =Bar", "Foo north="] {
            assert!(
                matches!(parse_cities(text), Err(WorldError::MalformedEdge { line: 1, .. })),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_cities(Path::new("/definitely/not/here/cities.txt"));
        assert!(matches!(result, Err(WorldError::Io { .. })));
    }
}
