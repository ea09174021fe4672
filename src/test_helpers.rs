//! Shared test fixtures for the ghibli-pages test suite.
//!
//! Entity constructors that fill in only the fields a test cares about,
//! plus a small canonical dataset used by the renderer tests. Reference
//! URLs follow the API shape (`https://api/<collection>/<id>`), so the
//! trailing-segment resolution path is exercised the same way it is in
//! production.

use crate::model::{Dataset, Film, Location, Person, Species, Vehicle};

/// Build a film reference URL the way the catalog API spells them.
pub fn film_url(id: &str) -> String {
    format!("https://api/films/{id}")
}

pub fn film(id: &str, title: &str, release_date: &str) -> Film {
    Film {
        id: id.to_string(),
        title: title.to_string(),
        original_title: format!("{title} (original)"),
        original_title_romanised: String::new(),
        description: format!("About {title}."),
        director: "Hayao Miyazaki".to_string(),
        producer: "Toshio Suzuki".to_string(),
        release_date: release_date.to_string(),
        running_time: "86".to_string(),
        rt_score: "95".to_string(),
    }
}

pub fn person(id: &str, name: &str, gender: &str, film_ids: &[&str]) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        gender: gender.to_string(),
        age: "10".to_string(),
        eye_color: "Brown".to_string(),
        hair_color: "Black".to_string(),
        species: None,
        films: film_ids.iter().map(|f| film_url(f)).collect(),
    }
}

pub fn species(id: &str, name: &str, classification: &str) -> Species {
    Species {
        id: id.to_string(),
        name: name.to_string(),
        classification: classification.to_string(),
        eye_colors: "Brown".to_string(),
        hair_colors: "Black".to_string(),
        people: Vec::new(),
        films: Vec::new(),
    }
}

pub fn location(id: &str, name: &str, film_ids: &[&str]) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        films: film_ids.iter().map(|f| film_url(f)).collect(),
    }
}

pub fn vehicle(id: &str, name: &str, film_ids: &[&str]) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        films: film_ids.iter().map(|f| film_url(f)).collect(),
    }
}

/// Two films, two people, one species, one location, one vehicle — enough
/// to exercise every association a page can render.
pub fn sample_dataset() -> Dataset {
    let mut satsuki = person("p1", "Satsuki Kusakabe", "Female", &["f1"]);
    satsuki.species = Some("https://api/species/s1".to_string());
    let totoro = person("p2", "Totoro", "Male", &["f1"]);

    let mut human = species("s1", "Human", "Mammal");
    human.people = vec!["https://api/people/p1".to_string()];
    human.films = vec![film_url("f1"), film_url("f2")];

    Dataset {
        films: Some(vec![
            film("f1", "My Neighbor Totoro", "1988"),
            film("f2", "Castle in the Sky", "1986"),
        ]),
        people: Some(vec![satsuki, totoro]),
        species: Some(vec![human]),
        locations: Some(vec![location("l1", "Kusakabe House", &["f1"])]),
        vehicles: Some(vec![vehicle("v1", "Cat Bus", &["f1"])]),
    }
}
