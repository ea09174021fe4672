//! Shared types for the fetched catalog dataset.
//!
//! All entities are deserialized verbatim from the catalog API and treated as
//! immutable for the duration of one generation run. Relationships between
//! entities exist only as reference URLs embedded in list fields (a person's
//! `films` entry is an opaque URL whose trailing path segment is a film id);
//! the [`crate::resolve`] module turns those into actual lookups at render
//! time. Nothing is ever written back onto these records.
//!
//! The [`Dataset`] is also what the `fetch` stage serializes to
//! `dataset.json`, so every type here derives both `Serialize` and
//! `Deserialize` — same contract as the manifests passed between pipeline
//! stages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A film record from the catalog.
///
/// Image and banner paths are not stored — they are derived from the id,
/// so the same film always maps to the same asset filenames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_title_romanised: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub running_time: String,
    #[serde(default)]
    pub rt_score: String,
}

impl Film {
    /// Poster image path, derived from the film id.
    pub fn image_path(&self) -> String {
        format!("images/{}.jpg", self.id)
    }

    /// Banner image path, derived from the film id.
    pub fn banner_path(&self) -> String {
        format!("banners/{}.jpg", self.id)
    }

    /// Release year as a sort key: numeric parse of the leading digits of
    /// `release_date`. Unparseable dates sort after everything else.
    pub fn release_year(&self) -> i64 {
        let digits: String = self
            .release_date
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(i64::MAX)
    }
}

/// A character record. `species` is a single reference URL (or absent);
/// `films` is a list of reference URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub eye_colors: String,
    #[serde(default)]
    pub hair_colors: String,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub films: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub films: Vec<String>,
}

/// The in-memory union of all five fetched collections, held for one
/// generation pass.
///
/// Each collection is independently optional: `None` means that endpoint's
/// fetch failed. [`Dataset::validate`] decides which absences are fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub films: Option<Vec<Film>>,
    pub people: Option<Vec<Person>>,
    pub species: Option<Vec<Species>>,
    pub locations: Option<Vec<Location>>,
    pub vehicles: Option<Vec<Vehicle>>,
}

#[derive(Error, Debug)]
#[error("missing required collections: {}", .0.join(", "))]
pub struct MissingCollections(pub Vec<String>);

impl Dataset {
    /// Require the collections without which no page can be rendered.
    ///
    /// Films, people, and species must be present. Locations and vehicles
    /// may be absent — pages that reference them degrade to a `None` tag.
    pub fn validate(&self) -> Result<(), MissingCollections> {
        let mut missing = Vec::new();
        if self.films.is_none() {
            missing.push("films".to_string());
        }
        if self.people.is_none() {
            missing.push("people".to_string());
        }
        if self.species.is_none() {
            missing.push("species".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingCollections(missing))
        }
    }

    pub fn films(&self) -> &[Film] {
        self.films.as_deref().unwrap_or_default()
    }

    pub fn people(&self) -> &[Person] {
        self.people.as_deref().unwrap_or_default()
    }

    pub fn species(&self) -> &[Species] {
        self.species.as_deref().unwrap_or_default()
    }

    pub fn locations(&self) -> &[Location] {
        self.locations.as_deref().unwrap_or_default()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{film, person};

    #[test]
    fn release_year_parses_plain_year() {
        let f = film("f1", "Totoro", "1988");
        assert_eq!(f.release_year(), 1988);
    }

    #[test]
    fn release_year_parses_full_date() {
        let f = film("f1", "Totoro", "1988-04-16");
        assert_eq!(f.release_year(), 1988);
    }

    #[test]
    fn release_year_unparseable_sorts_last() {
        let f = film("f1", "Totoro", "TBA");
        assert_eq!(f.release_year(), i64::MAX);
    }

    #[test]
    fn image_paths_derive_from_id() {
        let f = film("2baf70d1", "Totoro", "1988");
        assert_eq!(f.image_path(), "images/2baf70d1.jpg");
        assert_eq!(f.banner_path(), "banners/2baf70d1.jpg");
    }

    #[test]
    fn validate_passes_with_required_collections() {
        let ds = Dataset {
            films: Some(vec![]),
            people: Some(vec![]),
            species: Some(vec![]),
            locations: None,
            vehicles: None,
        };
        assert!(ds.validate().is_ok());
    }

    #[test]
    fn validate_names_every_missing_required_collection() {
        let ds = Dataset {
            films: None,
            people: Some(vec![]),
            species: None,
            locations: Some(vec![]),
            vehicles: Some(vec![]),
        };
        let err = ds.validate().unwrap_err();
        assert_eq!(err.0, vec!["films", "species"]);
    }

    #[test]
    fn missing_optional_collections_read_as_empty() {
        let ds = Dataset::default();
        assert!(ds.locations().is_empty());
        assert!(ds.vehicles().is_empty());
    }

    #[test]
    fn person_deserializes_without_species() {
        let p: Person = serde_json::from_str(
            r#"{"id": "p1", "name": "Satsuki", "gender": "Female", "films": []}"#,
        )
        .unwrap();
        assert_eq!(p.species, None);
    }

    #[test]
    fn unknown_api_fields_are_ignored() {
        let f: Film = serde_json::from_str(
            r#"{"id": "f1", "title": "Totoro", "url": "https://api/films/f1"}"#,
        )
        .unwrap();
        assert_eq!(f.title, "Totoro");
    }

    #[test]
    fn dataset_round_trips_through_json() {
        let ds = Dataset {
            films: Some(vec![film("f1", "Totoro", "1988")]),
            people: Some(vec![person("p1", "Satsuki", "Female", &["f1"])]),
            species: Some(vec![]),
            locations: None,
            vehicles: None,
        };
        let json = serde_json::to_string(&ds).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.films()[0].title, "Totoro");
        assert!(back.locations.is_none());
    }
}
