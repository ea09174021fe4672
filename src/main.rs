use clap::{Parser, Subcommand};
use ghibli_pages::{api, generate, minify, model, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghibli-pages")]
#[command(about = "Static site generator for the Studio Ghibli film catalog")]
#[command(long_about = "\
Static site generator for the Studio Ghibli film catalog

Fetches the five catalog collections (films, people, species, locations,
vehicles) from the public API and renders a static site: an index of all
films, one page per film, and one page per species, cross-linked by id.

Films, people, and species are required; if any of those endpoints is
unreachable the run aborts before writing a single file. Locations and
vehicles are optional and degrade to an empty tag list.

The index page carries a purely decorative layer of soot sprites — click
one and it bursts into dust.")]
#[command(version)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, default_value = api::DEFAULT_API_BASE, global = true)]
    api_base: String,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate dataset manifest
    #[arg(long, default_value = ".ghibli-pages-temp", global = true)]
    temp_dir: PathBuf,

    /// Write pages as rendered, without HTML minification
    #[arg(long, global = true)]
    no_minify: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the catalog collections into a dataset manifest
    Fetch,
    /// Produce the HTML site from a previously fetched manifest
    Generate,
    /// Run the full pipeline: fetch → generate
    Build,
    /// Fetch and validate without writing any pages
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let minifier = minify::select(!cli.no_minify);

    match cli.command {
        Command::Fetch => {
            let dataset = fetch_stage(&cli.api_base).await;
            write_manifest(&cli.temp_dir, &dataset)?;
        }
        Command::Generate => {
            let dataset = read_manifest(&cli.temp_dir)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let summary = generate::generate(&dataset, &cli.output, minifier.as_ref())?;
            output::print_generate_summary(&summary);
        }
        Command::Build => {
            let dataset = fetch_stage(&cli.api_base).await;
            write_manifest(&cli.temp_dir, &dataset)?;

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let summary = generate::generate(&dataset, &cli.output, minifier.as_ref())?;
            output::print_generate_summary(&summary);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let dataset = fetch_stage(&cli.api_base).await;
            dataset.validate()?;
            println!("==> Dataset is valid");
        }
    }

    Ok(())
}

async fn fetch_stage(api_base: &str) -> model::Dataset {
    println!("==> Stage 1: Fetching from {api_base}");
    let dataset = api::fetch_all(api_base).await;
    output::print_fetch_output(&dataset);
    dataset
}

fn write_manifest(
    temp_dir: &std::path::Path,
    dataset: &model::Dataset,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("dataset.json");
    let json = serde_json::to_string_pretty(dataset)?;
    std::fs::write(&manifest_path, json)?;
    Ok(())
}

fn read_manifest(temp_dir: &std::path::Path) -> Result<model::Dataset, Box<dyn std::error::Error>> {
    let manifest_path = temp_dir.join("dataset.json");
    let content = std::fs::read_to_string(&manifest_path)?;
    Ok(serde_json::from_str(&content)?)
}
