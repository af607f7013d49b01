//! Arcmark CLI
//!
//! One-shot batch conversion: read Arc's sidebar state, classify the pinned
//! container, and write a Netscape bookmarks HTML file.

mod export;

use std::path::PathBuf;

use clap::Parser;

use crate::export::Outcome;

#[derive(Parser)]
#[command(name = "arcmark")]
#[command(about = "Export Arc browser pinned tabs to a bookmarks HTML file")]
struct Cli {
    /// Output HTML filename
    #[arg(default_value = "arc_bookmarks_export.html")]
    output: PathBuf,
}

/// Initialize logging
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let source = arcmark_sidebar::default_path()?;
    tracing::debug!(path = %source.display(), "Reading Arc sidebar state");

    let records = arcmark_sidebar::load_items(&source)?;
    let catalog = arcmark_sidebar::classify(&records)?;

    let timestamp = chrono::Utc::now().timestamp();
    match export::run(catalog, &cli.output, timestamp)? {
        Outcome::Written(path) => {
            println!("Successfully exported bookmarks to: {}", path.display());
        }
        Outcome::NothingFound => {
            println!(
                "No pinned tabs (bookmarks) found using the specified structure. \
                 Output file not created."
            );
        }
    }

    Ok(())
}
