//! Site generation: validate, render, minify, write.
//!
//! The final pipeline stage. Takes a fetched [`Dataset`] and produces the
//! static site:
//!
//! ```text
//! dist/
//! ├── index.html               # Film catalog with soot-sprite overlay
//! ├── film_<id>.html           # One per film
//! ├── species_<id>.html        # One per species
//! ├── sprites.js               # Click-to-explode sprite animation
//! └── styles/
//!     ├── base.css             # Shared shell styles
//!     ├── index.css
//!     ├── film.css
//!     └── species.css
//! ```
//!
//! Validation runs before anything touches the filesystem: if a required
//! collection is missing, no file is written. After that, pages are
//! rendered, minified, and written strictly sequentially; a write failure
//! aborts and leaves whatever was already written in place. Existing files
//! are overwritten unconditionally and stale files from earlier runs are
//! not cleaned up.
//!
//! Static assets are embedded at compile time (`include_str!`) and written
//! next to the pages so the fixed stylesheet links and the `sprites.js`
//! reference resolve.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::minify::Minifier;
use crate::model::{Dataset, MissingCollections};
use crate::render;

const STYLE_BASE: &str = include_str!("../static/base.css");
const STYLE_INDEX: &str = include_str!("../static/index.css");
const STYLE_FILM: &str = include_str!("../static/film.css");
const STYLE_SPECIES: &str = include_str!("../static/species.css");
const SPRITES_JS: &str = include_str!("../static/sprites.js");

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Missing(#[from] MissingCollections),
}

/// Page counts from one generation pass.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub film_pages: usize,
    pub species_pages: usize,
}

/// Generate the whole site into `output_dir`, creating it if absent.
pub fn generate(
    dataset: &Dataset,
    output_dir: &Path,
    minifier: &dyn Minifier,
) -> Result<Summary, GenerateError> {
    dataset.validate()?;

    fs::create_dir_all(output_dir)?;
    write_static_assets(output_dir)?;

    write_page(output_dir, "index.html", render::render_index(dataset), minifier)?;

    for film in dataset.films() {
        let filename = render::film_filename(&film.id);
        write_page(
            output_dir,
            &filename,
            render::render_film_page(film, dataset),
            minifier,
        )?;
    }

    for species in dataset.species() {
        let filename = render::species_filename(&species.id);
        write_page(
            output_dir,
            &filename,
            render::render_species_page(species, dataset),
            minifier,
        )?;
    }

    Ok(Summary {
        film_pages: dataset.films().len(),
        species_pages: dataset.species().len(),
    })
}

fn write_page(
    output_dir: &Path,
    filename: &str,
    markup: maud::Markup,
    minifier: &dyn Minifier,
) -> Result<(), GenerateError> {
    let html = minifier.minify(&markup.into_string());
    fs::write(output_dir.join(filename), html)?;
    println!("Generated {filename}");
    Ok(())
}

fn write_static_assets(output_dir: &Path) -> std::io::Result<()> {
    let styles_dir = output_dir.join("styles");
    fs::create_dir_all(&styles_dir)?;
    fs::write(styles_dir.join("base.css"), STYLE_BASE)?;
    fs::write(styles_dir.join("index.css"), STYLE_INDEX)?;
    fs::write(styles_dir.join("film.css"), STYLE_FILM)?;
    fs::write(styles_dir.join("species.css"), STYLE_SPECIES)?;
    fs::write(output_dir.join("sprites.js"), SPRITES_JS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minify::Passthrough;
    use crate::model::Dataset;
    use crate::test_helpers::sample_dataset;
    use tempfile::TempDir;

    #[test]
    fn generates_one_file_per_page_plus_assets() {
        let tmp = TempDir::new().unwrap();
        let summary = generate(&sample_dataset(), tmp.path(), &Passthrough).unwrap();

        assert_eq!(summary.film_pages, 2);
        assert_eq!(summary.species_pages, 1);
        assert!(tmp.path().join("index.html").exists());
        assert!(tmp.path().join("film_f1.html").exists());
        assert!(tmp.path().join("film_f2.html").exists());
        assert!(tmp.path().join("species_s1.html").exists());
        assert!(tmp.path().join("sprites.js").exists());
        assert!(tmp.path().join("styles/base.css").exists());
        assert!(tmp.path().join("styles/index.css").exists());
    }

    #[test]
    fn missing_required_collection_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("dist");
        let dataset = Dataset {
            films: None,
            ..sample_dataset()
        };

        let err = generate(&dataset, &output, &Passthrough).unwrap_err();
        assert!(matches!(err, GenerateError::Missing(_)));
        assert!(!output.exists());
    }

    #[test]
    fn existing_files_are_overwritten() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("index.html"), "stale").unwrap();

        generate(&sample_dataset(), tmp.path(), &Passthrough).unwrap();
        let index = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn stale_files_are_left_alone() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("film_gone.html"), "old run").unwrap();

        generate(&sample_dataset(), tmp.path(), &Passthrough).unwrap();
        assert!(tmp.path().join("film_gone.html").exists());
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let dataset = sample_dataset();
        let tmp_a = TempDir::new().unwrap();
        let tmp_b = TempDir::new().unwrap();
        generate(&dataset, tmp_a.path(), &Passthrough).unwrap();
        generate(&dataset, tmp_b.path(), &Passthrough).unwrap();

        for file in ["index.html", "film_f1.html", "species_s1.html"] {
            let a = std::fs::read(tmp_a.path().join(file)).unwrap();
            let b = std::fs::read(tmp_b.path().join(file)).unwrap();
            assert_eq!(a, b, "{file} differs between runs");
        }
    }
}
