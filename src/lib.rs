//! # Ghibli Pages
//!
//! A minimal static site generator for the Studio Ghibli film catalog.
//! The public catalog API is the data source: one fetch pulls the five
//! collections (films, people, species, locations, vehicles), and one
//! generation pass turns them into a self-contained static site.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Fetch     API        →  dataset.json   (five concurrent GETs → typed records)
//! 2. Generate  dataset    →  dist/          (validate → render → minify → write)
//! ```
//!
//! The stages are independent and joined by a JSON manifest, so each can
//! run on its own (`fetch` / `generate` subcommands) or back to back
//! (`build`). This separation exists for the usual reasons: the manifest
//! is human-readable JSON you can inspect, and generation can be re-run
//! and tested without touching the network.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`api`] | Stage 1 — concurrent fetch of the five collection endpoints |
//! | [`model`] | Entity types, the combined [`model::Dataset`], required-collection validation |
//! | [`resolve`] | Cross-reference resolution between collections (reference URLs → entities) |
//! | [`render`] | Stage 2 — maud templates for the index, film, and species pages |
//! | [`generate`] | Stage 2 — minify + write orchestration, embedded static assets |
//! | [`minify`] | Minifier strategy: `minify-html` or passthrough, chosen at startup |
//! | [`output`] | CLI output formatting for fetch and generate results |
//!
//! # Design Decisions
//!
//! ## Per-Endpoint Failure Containment
//!
//! A failed fetch nulls out that one collection; the other four proceed.
//! Whether the hole is fatal is a validation question, not a fetch
//! question: films, people, and species are required, while locations and
//! vehicles degrade to an empty "None" tag on the pages that mention them.
//!
//! ## Reference URLs Resolved at Render Time
//!
//! The API relates entities through opaque reference URLs. Those are never
//! rewritten onto the records; [`resolve`] derives the associations fresh
//! inside each render call, which keeps every page a pure function of the
//! dataset — regenerating from unchanged input is byte-identical.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, template
//! variables are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Minification as an Injected Strategy
//!
//! The writer receives a [`minify::Minifier`] selected once at startup
//! (real or passthrough) instead of probing for a minifier at runtime.
//! Options are fixed and conservative — nothing that could change what a
//! page says.

pub mod api;
pub mod generate;
pub mod minify;
pub mod model;
pub mod output;
pub mod render;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;
