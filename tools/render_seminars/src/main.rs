use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use seminars::handlers::web::render_seminar_page;
use seminars::Seminar;

#[derive(Parser, Debug)]
#[command(name = "render_seminars")]
#[command(about = "Render seminar records (JSON) into announcement pages")]
struct Args {
    /// JSON files holding one seminar record or an array of them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the pages are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Only print what would be written
    #[arg(long)]
    dry_run: bool,

    /// Overwrite pages that already exist
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if !args.dry_run {
        fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;
    }

    let mut written = 0;
    for input in &args.inputs {
        for seminar in load_seminars(input)? {
            if render_one(&seminar, &args)? {
                written += 1;
            }
        }
    }

    info!("Wrote {} page(s) to {}", written, args.out_dir.display());
    Ok(())
}

/// Read a file holding either a single seminar record or an array of them.
fn load_seminars(path: &Path) -> Result<Vec<Seminar>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let seminars = match value {
        Value::Array(records) => records.iter().map(Seminar::from_object).collect(),
        record => vec![Seminar::from_object(&record)],
    };
    info!("Loaded {} seminar(s) from {}", seminars.len(), path.display());
    Ok(seminars)
}

/// Returns whether a page was written.
fn render_one(seminar: &Seminar, args: &Args) -> Result<bool> {
    let filename = seminar.target_filename();
    if seminar.all_authors().is_empty() {
        warn!(
            "Seminar {} has no real authors, page would be named {:?}; skipping",
            seminar.index_number, filename
        );
        return Ok(false);
    }

    let target = args.out_dir.join(&filename);
    if target.exists() && !args.force {
        info!("{} already exists. Use --force to overwrite.", target.display());
        return Ok(false);
    }

    let html = render_seminar_page(seminar)
        .with_context(|| format!("Failed to render {}", filename))?;

    if args.dry_run {
        info!("[dry run] {} ({} bytes): {}", target.display(), html.len(), seminar.cumulative_title());
        return Ok(false);
    }

    fs::write(&target, html).with_context(|| format!("Failed to write {}", target.display()))?;
    info!("  - {}: {}", target.display(), seminar.cumulative_title());
    Ok(true)
}
