//! HTML page templates.
//!
//! Every renderer here is a pure function of (entity, dataset) — no I/O, no
//! mutation of fetched data — so regenerating from an unchanged dataset
//! produces byte-identical markup. Associations between entities are
//! computed on the fly through [`crate::resolve`].
//!
//! ## Page kinds
//!
//! - **Index** (`index.html`): one card per film, sorted by release year,
//!   plus the decorative soot-sprite overlay and its companion script.
//! - **Film detail** (`film_<id>.html`): banner, metadata grid, character
//!   cards, tag lists for locations, species, and vehicles.
//! - **Species detail** (`species_<id>.html`): classification-colored hero,
//!   metadata grid, character cards, film tag list.
//!
//! All three share one document shell: doctype, head with fixed stylesheet
//! links, and a footer crediting the data source. Cross-page links are
//! built by the same `film_filename`/`species_filename` helpers the writer
//! uses, so link targets always match the files on disk.
//!
//! ## HTML generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use maud::{DOCTYPE, Markup, html};

use crate::model::{Dataset, Film, Person, Species};
use crate::resolve;

/// Preset (left offset, animation delay) pairs for the six clickable soot
/// sprites on the index page.
const SOOT_SPRITES: [(&str, &str); 6] = [
    ("8%", "0s"),
    ("22%", "1.3s"),
    ("38%", "2.6s"),
    ("55%", "0.7s"),
    ("71%", "1.9s"),
    ("86%", "3.2s"),
];

/// Left offsets for the ambient glow decorations.
const GLOW_POSITIONS: [&str; 3] = ["15%", "48%", "80%"];

/// (left offset, animation delay) pairs for the floating leaves.
const LEAF_POSITIONS: [(&str, &str); 4] = [("12%", "0s"), ("35%", "2s"), ("60%", "4s"), ("85%", "1s")];

/// Output filename for a film detail page. Must match the links emitted by
/// the templates below.
pub fn film_filename(id: &str) -> String {
    format!("film_{id}.html")
}

/// Output filename for a species detail page.
pub fn species_filename(id: &str) -> String {
    format!("species_{id}.html")
}

// ============================================================================
// Shared components
// ============================================================================

/// The common document shell: doctype, head with fixed stylesheet links,
/// body content, shared footer. `extra_css` is the per-page-kind sheet
/// loaded after the base styles.
fn page_shell(title: &str, extra_css: &str, content: Markup, overlay: Option<Markup>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="styles/base.css";
                link rel="stylesheet" href={ "styles/" (extra_css) };
            }
            body {
                @if let Some(overlay) = overlay {
                    (overlay)
                }
                (content)
                footer.site-footer {
                    p { "Data from the Studio Ghibli API." }
                }
            }
        }
    }
}

/// The decorative overlay on the index page: six clickable soot sprites,
/// three ambient glows, four floating leaves, and the animation script.
fn sprite_overlay() -> Markup {
    html! {
        div.sprite-layer {
            @for (left, delay) in SOOT_SPRITES {
                div.soot-sprite style={ "left:" (left) ";animation-delay:" (delay) } {
                    div.sprite-eye.sprite-eye-left {}
                    div.sprite-eye.sprite-eye-right {}
                }
            }
            @for left in GLOW_POSITIONS {
                div.dust-glow style={ "left:" (left) } {}
            }
            @for (left, delay) in LEAF_POSITIONS {
                div.leaf style={ "left:" (left) ";animation-delay:" (delay) } {}
            }
        }
        script src="sprites.js" defer {}
    }
}

/// Uppercase initials for the avatar circle: first letters of the first and
/// last words, or the first two characters of a single-word name.
pub fn avatar_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let mut initials = String::new();
            initials.extend(first.chars().take(1));
            initials.extend(last.chars().take(1));
            initials.to_uppercase()
        }
    }
}

/// Avatar color bucket keyed by normalized gender. Case-insensitive exact
/// match on "female"/"male"; anything else (including unset) is neutral.
pub fn gender_class(gender: &str) -> &'static str {
    let normalized = gender.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "female" => "avatar-female",
        "male" => "avatar-male",
        _ => "avatar-neutral",
    }
}

/// Hero color bucket from the classification text, matched by
/// case-insensitive substring.
pub fn classification_class(classification: &str) -> &'static str {
    let normalized = classification.to_ascii_lowercase();
    if normalized.contains("mammal") {
        "hero-mammal"
    } else if normalized.contains("spirit") || normalized.contains("god") {
        "hero-spirit"
    } else if normalized.contains("bird") || normalized.contains("avian") {
        "hero-avian"
    } else {
        "hero-default"
    }
}

/// One character card: initials avatar plus detail rows. Empty fields are
/// omitted rather than rendered as placeholders.
fn character_card(person: &Person, all_species: &[Species]) -> Markup {
    let species_name = person
        .species
        .as_deref()
        .map(resolve::reference_id)
        .and_then(|id| resolve::find_by_id(id, all_species, |s| s.id.as_str()))
        .map(|s| s.name.as_str());

    html! {
        div.character-card {
            div.avatar.(gender_class(&person.gender)) { (avatar_initials(&person.name)) }
            div.character-info {
                h3 { (person.name) }
                @if !person.gender.is_empty() {
                    p.detail { "Gender: " (person.gender) }
                }
                @if !person.age.is_empty() {
                    p.detail { "Age: " (person.age) }
                }
                @if !person.eye_color.is_empty() {
                    p.detail { "Eyes: " (person.eye_color) }
                }
                @if !person.hair_color.is_empty() {
                    p.detail { "Hair: " (person.hair_color) }
                }
                @if let Some(name) = species_name {
                    p.detail { "Species: " (name) }
                }
            }
        }
    }
}

/// A tag-list section with its count in the heading. An entirely empty
/// collection renders a single literal "None" tag.
fn tag_section(heading: &str, tags: Vec<Markup>) -> Markup {
    html! {
        section.tag-section {
            h2 { (heading) " (" (tags.len()) ")" }
            ul.tag-list {
                @if tags.is_empty() {
                    li.tag.tag-empty { "None" }
                } @else {
                    @for tag in tags {
                        (tag)
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

/// Renders the index page: one card per film, ascending by release year.
/// Ties keep the collection's original order (stable sort).
pub fn render_index(dataset: &Dataset) -> Markup {
    let mut films: Vec<&Film> = dataset.films().iter().collect();
    films.sort_by_key(|f| f.release_year());

    let content = html! {
        header.site-header {
            h1 { "Studio Ghibli Films" }
            p.tagline { "The complete film catalog" }
        }
        main.film-grid {
            @for film in &films {
                a.film-card href=(film_filename(&film.id)) {
                    img.film-poster src=(film.image_path()) alt=(film.title) loading="lazy";
                    div.film-summary {
                        h2 { (film.title) }
                        @if !film.original_title.is_empty() {
                            p.original-title { (film.original_title) }
                        }
                        p.film-meta {
                            span { (film.director) }
                            " · "
                            span { (film.producer) }
                        }
                        p.film-meta {
                            span { (film.running_time) " min" }
                            " · "
                            span.score { (film.rt_score) "%" }
                        }
                        p.film-description { (film.description) }
                    }
                }
            }
        }
    };

    page_shell("Studio Ghibli Films", "index.css", content, Some(sprite_overlay()))
}

/// Renders a film detail page: banner, metadata grid, character cards, and
/// tag lists for locations, species, and vehicles.
pub fn render_film_page(film: &Film, dataset: &Dataset) -> Markup {
    let people = resolve::find_by_film(&film.id, dataset.people());
    let locations = resolve::find_by_film(&film.id, dataset.locations());
    let vehicles = resolve::find_by_film(&film.id, dataset.vehicles());

    // Species come from the film's characters, deduplicated by raw
    // reference string; references that don't resolve are dropped.
    let species: Vec<&Species> = resolve::unique_species_refs(&people)
        .into_iter()
        .map(resolve::reference_id)
        .filter_map(|id| resolve::find_by_id(id, dataset.species(), |s| s.id.as_str()))
        .collect();

    let location_tags: Vec<Markup> = locations
        .iter()
        .map(|l| html! { li.tag { (l.name) } })
        .collect();
    let species_tags: Vec<Markup> = species
        .iter()
        .map(|s| html! { li.tag { a href=(species_filename(&s.id)) { (s.name) } } })
        .collect();
    let vehicle_tags: Vec<Markup> = vehicles
        .iter()
        .map(|v| html! { li.tag { (v.name) } })
        .collect();

    let content = html! {
        div.banner {
            img src=(film.banner_path()) alt=(film.title);
        }
        main.film-page {
            header.film-header {
                h1 { (film.title) }
                @if !film.original_title.is_empty() {
                    p.original-title {
                        (film.original_title)
                        @if !film.original_title_romanised.is_empty() {
                            " (" (film.original_title_romanised) ")"
                        }
                    }
                }
            }
            dl.metadata-grid {
                @if !film.director.is_empty() {
                    dt { "Director" } dd { (film.director) }
                }
                @if !film.producer.is_empty() {
                    dt { "Producer" } dd { (film.producer) }
                }
                @if !film.release_date.is_empty() {
                    dt { "Released" } dd { (film.release_date) }
                }
                @if !film.running_time.is_empty() {
                    dt { "Running time" } dd { (film.running_time) " min" }
                }
                @if !film.rt_score.is_empty() {
                    dt { "Score" } dd { (film.rt_score) "%" }
                }
            }
            @if !film.description.is_empty() {
                p.film-description { (film.description) }
            }
            section.characters {
                h2 { "Characters (" (people.len()) ")" }
                div.character-grid {
                    @for person in &people {
                        (character_card(person, dataset.species()))
                    }
                }
            }
            (tag_section("Locations", location_tags))
            (tag_section("Species", species_tags))
            (tag_section("Vehicles", vehicle_tags))
            p.back-link { a href="index.html" { "← All films" } }
        }
    };

    page_shell(&film.title, "film.css", content, None)
}

/// Renders a species detail page: classification-colored hero, metadata
/// grid, character cards for resolved people, and a film tag list.
///
/// A reference whose trailing segment is a bare collection name is
/// malformed data and is filtered out before lookup.
pub fn render_species_page(species: &Species, dataset: &Dataset) -> Markup {
    let people: Vec<&Person> = species
        .people
        .iter()
        .map(|url| resolve::reference_id(url))
        .filter(|segment| !resolve::is_collection_name(segment))
        .filter_map(|id| resolve::find_by_id(id, dataset.people(), |p| p.id.as_str()))
        .collect();

    let films: Vec<&Film> = species
        .films
        .iter()
        .map(|url| resolve::reference_id(url))
        .filter(|segment| !resolve::is_collection_name(segment))
        .filter_map(|id| resolve::find_by_id(id, dataset.films(), |f| f.id.as_str()))
        .collect();

    let film_tags: Vec<Markup> = films
        .iter()
        .map(|f| html! { li.tag { a href=(film_filename(&f.id)) { (f.title) } } })
        .collect();

    let content = html! {
        div.hero.(classification_class(&species.classification)) {
            h1 { (species.name) }
        }
        main.species-page {
            dl.metadata-grid {
                @if !species.classification.is_empty() {
                    dt { "Classification" } dd { (species.classification) }
                }
                @if !species.eye_colors.is_empty() {
                    dt { "Eye colors" } dd { (species.eye_colors) }
                }
                @if !species.hair_colors.is_empty() {
                    dt { "Hair colors" } dd { (species.hair_colors) }
                }
            }
            section.characters {
                h2 { "Characters (" (people.len()) ")" }
                div.character-grid {
                    @for person in &people {
                        (character_card(person, dataset.species()))
                    }
                }
            }
            (tag_section("Films", film_tags))
            p.back-link { a href="index.html" { "← All films" } }
        }
    };

    page_shell(&species.name, "species.css", content, None)
}

// ============================================================================
// Tests
// ============================================================================
