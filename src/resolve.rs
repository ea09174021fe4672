//! Cross-reference resolution between fetched collections.
//!
//! The API expresses relationships only as reference URLs: a location's
//! `films` field is a list of opaque strings whose trailing path segment is
//! a film id. Nothing upstream guarantees those references resolve — a URL
//! may point at a nonexistent id, or degenerately at a bare collection
//! endpoint. Everything here treats a bad reference as a non-match, never
//! as an error.
//!
//! All lookups are pure functions over borrowed slices and preserve the
//! collection's original order, so render output is stable across runs.

use crate::model::{Location, Person, Species, Vehicle};

/// The five top-level collection names. A reference whose trailing segment
/// is one of these points at an endpoint, not an entity — malformed data.
const COLLECTION_NAMES: &[&str] = &["films", "people", "species", "locations", "vehicles"];

/// Anything that carries a list of film reference URLs.
pub trait FilmLinked {
    fn film_refs(&self) -> &[String];
}

impl FilmLinked for Person {
    fn film_refs(&self) -> &[String] {
        &self.films
    }
}

impl FilmLinked for Location {
    fn film_refs(&self) -> &[String] {
        &self.films
    }
}

impl FilmLinked for Vehicle {
    fn film_refs(&self) -> &[String] {
        &self.films
    }
}

impl FilmLinked for Species {
    fn film_refs(&self) -> &[String] {
        &self.films
    }
}

/// Extract the lookup key from a reference URL: the trailing path segment,
/// or the input unchanged when it contains no separator (already an id).
pub fn reference_id(url_or_id: &str) -> &str {
    match url_or_id.rsplit_once('/') {
        Some((_, segment)) => segment,
        None => url_or_id,
    }
}

/// Whether a resolved segment is one of the collection endpoint names
/// rather than an entity id.
pub fn is_collection_name(segment: &str) -> bool {
    COLLECTION_NAMES.contains(&segment)
}

/// Entities whose film references mention `film_id`, in original order.
///
/// A reference matches if it contains `film_id` as a substring. An id that
/// is a prefix or suffix of another id would therefore over-match; this is
/// inherited behavior, kept because tightening to exact segment equality
/// changes observable output.
pub fn find_by_film<'a, T: FilmLinked>(film_id: &str, collection: &'a [T]) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|entity| entity.film_refs().iter().any(|url| url.contains(film_id)))
        .collect()
}

/// Linear search by exact id equality; first match wins.
pub fn find_by_id<'a, T>(id: &str, collection: &'a [T], entity_id: impl Fn(&T) -> &str) -> Option<&'a T> {
    collection.iter().find(|entity| entity_id(entity) == id)
}

/// The distinct raw species references carried by a set of people, in
/// first-seen order.
///
/// Deduplication is by exact string equality of the reference, not by
/// resolved id — two different URL spellings of the same species stay
/// distinct, as they did upstream.
pub fn unique_species_refs<'a>(people: &[&'a Person]) -> Vec<&'a str> {
    let mut refs: Vec<&str> = Vec::new();
    for person in people {
        if let Some(species_ref) = person.species.as_deref() {
            if !refs.contains(&species_ref) {
                refs.push(species_ref);
            }
        }
    }
    refs
}
