//! Alien-file parsing for scripted runs.
//!
//! One alien per line: its numeric id and starting city joined by `=`,
//! followed by the labels it will follow, one per turn:
//!
//! ```text
//! 1=Foo north wait south
//! 2=Bar west
//! ```
//!
//! Once its script runs out, an alien is stuck.

use std::collections::BTreeMap;
use std::path::Path;

use invasion_types::{AlienId, CityName, Direction};
use invasion_world::CityMap;
use tracing::debug;

use crate::alien::Alien;
use crate::error::AgentError;
use crate::policy::ScriptedPolicy;

/// Parse an alien description against an already-built city graph.
///
/// Aliens are returned in ascending id order.
///
/// # Errors
///
/// Returns an [`AgentError`] for a malformed line, a non-integer id, an
/// unknown starting city, a label outside the vocabulary, or a duplicate id.
pub fn parse_scripted_aliens(text: &str, cities: &CityMap) -> Result<Vec<Alien>, AgentError> {
    let mut aliens: BTreeMap<AlienId, Alien> = BTreeMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index.saturating_add(1);
        let mut tokens = raw.split_whitespace();
        let Some(head) = tokens.next() else {
            continue;
        };

        let (id_token, city_token) =
            head.split_once('=')
                .ok_or_else(|| AgentError::MalformedAlien {
                    line,
                    token: head.to_owned(),
                })?;
        let id: AlienId = id_token
            .parse()
            .map_err(|_not_a_number| AgentError::InvalidAlienId {
                line,
                token: id_token.to_owned(),
            })?;
        let city = CityName::from(city_token);
        if !cities.contains(city.as_str()) {
            return Err(AgentError::UnknownStartCity { line, city });
        }

        let steps = tokens
            .map(|label| {
                label
                    .parse::<Direction>()
                    .map_err(|_unknown| AgentError::UnknownDirection {
                        line,
                        label: label.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if aliens.contains_key(&id) {
            return Err(AgentError::DuplicateAlien(id));
        }

        debug!(alien = %id, city = %city, steps = steps.len(), "Scripted alien parsed");
        aliens.insert(id, Alien::new(id, city, Box::new(ScriptedPolicy::new(steps))));
    }

    Ok(aliens.into_values().collect())
}

/// Read and parse an alien file.
///
/// # Errors
///
/// Returns [`AgentError::Io`] if the file cannot be read, or any error of
/// [`parse_scripted_aliens`].
pub fn load_scripted_aliens(path: &Path, cities: &CityMap) -> Result<Vec<Alien>, AgentError> {
    let text = std::fs::read_to_string(path)?;
    parse_scripted_aliens(&text, cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_map() -> CityMap {
        invasion_world::parse_cities("Foo north=Bar\nBar south=Foo\nBaz\n").unwrap_or_default()
    }

    #[test]
    fn parses_ids_cities_and_steps() {
        let map = make_map();
        let aliens = parse_scripted_aliens("2=Bar south\n1=Foo north wait\n", &map);
        assert!(aliens.is_ok());
        let aliens = aliens.unwrap_or_default();
        let ids: Vec<u32> = aliens.iter().map(|a| a.id().into_inner()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(aliens.first().map(|a| a.origin().as_str()), Some("Foo"));
    }

    #[test]
    fn labels_are_case_insensitive() {
        let map = make_map();
        assert!(parse_scripted_aliens("1=Foo NORTH Wait", &map).is_ok());
    }

    #[test]
    fn unknown_city_is_rejected() {
        let map = make_map();
        let result = parse_scripted_aliens("1=Atlantis north", &map);
        assert!(matches!(result, Err(AgentError::UnknownStartCity { line: 1, .. })));
        if let Err(e) = result {
            assert_eq!(e.to_string(), "non existing city Atlantis");
        }
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let map = make_map();
        let result = parse_scripted_aliens("zork=Foo north", &map);
        assert!(matches!(result, Err(AgentError::InvalidAlienId { .. })));
    }

    #[test]
    fn missing_separator_is_rejected() {
        let map = make_map();
        let result = parse_scripted_aliens("\n1Foo north", &map);
        assert!(matches!(result, Err(AgentError::MalformedAlien { line: 2, .. })));
    }

    #[test]
    fn unknown_step_is_rejected() {
        let map = make_map();
        let result = parse_scripted_aliens("1=Foo north sideways", &map);
        assert!(matches!(
            result,
            Err(AgentError::UnknownDirection { ref label, .. }) if label == "sideways"
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let map = make_map();
        assert!(matches!(
            parse_scripted_aliens("1=Foo\n1=Bar\n", &map),
            Err(AgentError::DuplicateAlien(_))
        ));
    }

    #[test]
    fn empty_script_yields_no_aliens() {
        let map = make_map();
        assert!(parse_scripted_aliens("\n\n", &map).is_ok_and(|a| a.is_empty()));
    }
}
