//! CLI tool that renders the AI Agents Overview deck to a PowerPoint file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_core::{ai_agents_overview, Deck, DEFAULT_OUTPUT};
use deck_pptx::{normalize_text, DeckInspector, DeckRenderer, RenderSummary};
use std::path::{Path, PathBuf};

/// Render a slide deck to a .pptx presentation.
#[derive(Parser, Debug)]
#[command(name = "deck-render")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output presentation file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Load the deck from a JSON file instead of the built-in content
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Directory that image paths are relative to
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,

    /// Print the selected deck as JSON and exit
    #[arg(long)]
    dump_deck: bool,

    /// Read the written file back and check slide count and titles
    #[arg(long)]
    verify: bool,

    /// Print the render summary as JSON instead of a message
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let deck = load_deck(args.deck.as_deref())?;

    if args.dump_deck {
        println!("{}", deck.to_json_pretty()?);
        return Ok(());
    }

    let renderer = DeckRenderer::new().with_asset_root(&args.assets);
    let summary = renderer
        .render(&deck, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    for skipped in &summary.skipped_images {
        log::warn!("Image not placed: {}", skipped.display());
    }

    if args.verify {
        verify_output(&args.output, &deck)?;
    }

    report(&args, &summary)
}

/// Select the deck: a JSON file when given, the built-in content otherwise.
fn load_deck(path: Option<&Path>) -> Result<Deck> {
    match path {
        Some(path) => {
            Deck::from_path(path).with_context(|| format!("Failed to load deck from {}", path.display()))
        }
        None => Ok(ai_agents_overview()),
    }
}

/// Check that the written file holds the deck's slides in order.
fn verify_output(path: &Path, deck: &Deck) -> Result<()> {
    let outline = DeckInspector::new()
        .inspect_path(path)
        .with_context(|| format!("Failed to read back {}", path.display()))?;

    let expected: Vec<String> = deck.titles().into_iter().map(normalize_text).collect();
    if outline.titles() != expected {
        bail!(
            "Verification failed: expected titles {:?}, found {:?}",
            expected,
            outline.titles()
        );
    }

    log::debug!("Verified {} slides in {}", outline.slides.len(), path.display());
    Ok(())
}

fn report(args: &Args, summary: &RenderSummary) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("Presentation created: {}", args.output.display());
    }

    if args.verbose {
        eprintln!(
            "  {} slides, {} pictures, {} images skipped",
            summary.slide_count,
            summary.picture_count,
            summary.skipped_images.len()
        );
    }

    Ok(())
}
