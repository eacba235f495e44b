//! Document inspector: validates a topology document and prints a summary.
//!
//! ```text
//! topodraw <document.json> [--settings <settings.json>] [--normalize <out.json>]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use topodraw::data::read_document;
use topodraw::render::RecordingCanvas;
use topodraw::settings::default_settings_path;
use topodraw::{Editor, EditorSettings, Object};

#[derive(Parser)]
#[command(version, about = "Validate a topology document and print a summary")]
struct Cli {
    #[arg(help = "Topology document to inspect")]
    document: PathBuf,

    #[arg(help = "Editor settings file (defaults to the user config dir)", long)]
    settings: Option<PathBuf>,

    #[arg(help = "Write the document back out in canonical form", long)]
    normalize: Option<PathBuf>,
}

fn main() -> Result<()> {
    topodraw::logging::init()?;
    let args = Cli::parse();

    let settings = match args.settings.or_else(default_settings_path) {
        Some(path) => EditorSettings::load_or_default(&path),
        None => EditorSettings::default(),
    };
    settings.validate().context("Invalid settings")?;

    let topology = read_document(&args.document)
        .with_context(|| format!("Failed to load {}", args.document.display()))?;
    info!(path = %args.document.display(), "Loaded document");

    let positions = topology.objects.iter().filter(|o| !o.is_arc()).count();
    let arcs = topology.objects.iter().filter(|o| o.is_arc()).count();
    let closed = topology.objects.iter().filter(|o| o.is_closed_arc()).count();
    let empty = topology
        .objects
        .iter()
        .filter(|o| matches!(o, Object::Arc(a) if a.points.is_empty()))
        .count();

    let mut editor = Editor::with_topology(topology, settings, 0);
    let mut canvas = RecordingCanvas::new();
    let stats = editor.render(&mut canvas);
    editor.perf_monitor().log_summary_if_slow();

    println!("points:      {}", editor.topology().points.len());
    println!("positions:   {}", positions);
    println!("arcs:        {} ({} closed, {} empty)", arcs, closed, empty);
    println!("drawn:       {}", stats.drawn);
    println!("edges:       {}", editor.distortion().len());

    if let Some(out) = args.normalize {
        editor
            .export_file(&out)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        println!("normalized:  {}", out.display());
    }

    Ok(())
}
