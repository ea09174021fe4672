//! CLI output formatting for the pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. Stage banners
//! (`==> Stage 1: ...`) are printed by `main`, not here.

use crate::generate::Summary;
use crate::model::Dataset;

/// One line per collection: record count, or "unavailable" for an
/// endpoint whose fetch failed.
pub fn format_fetch_output(dataset: &Dataset) -> Vec<String> {
    fn line<T>(name: &str, collection: &Option<Vec<T>>) -> String {
        match collection {
            Some(records) => format!("{name}: {} records", records.len()),
            None => format!("{name}: unavailable"),
        }
    }

    vec![
        line("films", &dataset.films),
        line("people", &dataset.people),
        line("species", &dataset.species),
        line("locations", &dataset.locations),
        line("vehicles", &dataset.vehicles),
    ]
}

pub fn print_fetch_output(dataset: &Dataset) {
    for line in format_fetch_output(dataset) {
        println!("{line}");
    }
}

/// Final summary line after generation.
pub fn format_generate_summary(summary: &Summary) -> String {
    format!(
        "Generated 1 index page, {} film pages, {} species pages",
        summary.film_pages, summary.species_pages
    )
}

pub fn print_generate_summary(summary: &Summary) {
    println!("{}", format_generate_summary(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use crate::test_helpers::sample_dataset;

    #[test]
    fn fetch_output_counts_records() {
        let lines = format_fetch_output(&sample_dataset());
        assert_eq!(lines[0], "films: 2 records");
        assert_eq!(lines[1], "people: 2 records");
        assert_eq!(lines[2], "species: 1 records");
    }

    #[test]
    fn fetch_output_marks_failed_endpoints() {
        let dataset = Dataset {
            locations: None,
            vehicles: None,
            ..sample_dataset()
        };
        let lines = format_fetch_output(&dataset);
        assert_eq!(lines[3], "locations: unavailable");
        assert_eq!(lines[4], "vehicles: unavailable");
    }

    #[test]
    fn generate_summary_counts_pages() {
        let summary = Summary {
            film_pages: 22,
            species_pages: 9,
        };
        assert_eq!(
            format_generate_summary(&summary),
            "Generated 1 index page, 22 film pages, 9 species pages"
        );
    }
}
