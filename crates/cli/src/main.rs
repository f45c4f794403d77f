//! Notegraph CLI
//!
//! Scans a vault of markdown notes, folds them into a graph of nodes, links,
//! and categories, and writes a self-contained HTML visualization.
//!
//! ```text
//! notegraph [VAULT] [--output graph.html] [--json graph.json] [--extension md]
//! ```
//!
//! Unreadable notes are skipped with a warning; the run only fails when the
//! output artifact cannot be written. Set `RUST_LOG=info` for a run summary.

mod pipeline;
mod render;
mod scan;

use anyhow::{Context, Result};
use clap::Parser;
use notegraph_graph::GraphFragments;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notegraph", version, about = "Render a markdown note vault as an interactive graph")]
struct Args {
    /// Vault directory to scan for notes
    #[arg(default_value = ".")]
    vault: PathBuf,

    /// Path of the HTML page to write
    #[arg(short, long, default_value = "graph.html")]
    output: PathBuf,

    /// Also dump the assembled graph as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Note file extension, used for both the scan filter and link resolution
    #[arg(long, default_value = "md")]
    extension: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let paths = scan::find_notes(&args.vault, &args.extension);
    if paths.is_empty() {
        println!(
            "no .{} notes found under {}",
            args.extension,
            args.vault.display()
        );
        return Ok(());
    }

    log::info!(
        "found {} notes under {}",
        paths.len(),
        args.vault.display()
    );

    let graph = pipeline::build_graph(&args.vault, &paths, &args.extension);

    if let Some(json_path) = &args.json {
        graph
            .save_to_file(json_path)
            .with_context(|| format!("failed to write graph JSON to {}", json_path.display()))?;
    }

    let page = render::render_page(&GraphFragments::from_graph(&graph));
    std::fs::write(&args.output, page)
        .with_context(|| format!("failed to write output file {}", args.output.display()))?;

    println!(
        "wrote {} ({} nodes, {} links, {} categories)",
        args.output.display(),
        graph.node_count(),
        graph.link_count(),
        graph.category_count()
    );

    Ok(())
}
