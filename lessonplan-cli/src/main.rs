//! lessonplan — render lesson plan pages and the site's bundler config.
//!
//! # Usage
//!
//! ```text
//! lessonplan render <lesson> [--sections a,b] [--out FILE] [--templates DIR] [--dry-run]
//! lessonplan sheet <lesson> [--sections a,b]
//! lessonplan diff <lesson> <existing.html> [--sections a,b]
//! lessonplan bundler [--config bundler.yaml] [--out webpack.config.js] [--check] [--dry-run]
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::{bundler::BundlerArgs, diff::DiffArgs, render::RenderArgs, sheet::SheetArgs};
use lessonplan_core::SectionList;
use lessonplan_renderer::RenderOptions;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "lessonplan",
    version,
    about = "Render lesson plan pages and the client bundle config",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the lesson plan page as HTML.
    Render(RenderArgs),

    /// Print a plain-text lesson sheet for printing.
    Sheet(SheetArgs),

    /// Show a unified diff between an existing page and a fresh render.
    Diff(DiffArgs),

    /// Emit webpack.config.js from bundler.yaml.
    Bundler(BundlerArgs),
}

// ---------------------------------------------------------------------------
// Shared arguments
// ---------------------------------------------------------------------------

/// `--sections objectives,homework` — which content sections to show, in order.
#[derive(Args, Debug, Clone, Default)]
pub struct SectionsArg {
    /// Comma-separated section names. Defaults to all ten content sections;
    /// an empty string shows none.
    #[arg(long, short = 's', value_name = "NAMES")]
    pub sections: Option<SectionList>,
}

impl SectionsArg {
    pub fn resolve(&self) -> SectionList {
        self.sections.clone().unwrap_or_default()
    }
}

/// Link targets embedded in the rendered page.
#[derive(Args, Debug, Clone)]
pub struct LinksArg {
    /// Target of the "Create another lesson plan" link.
    #[arg(long, default_value = "/")]
    pub create_url: String,

    /// Public URL of the client bundle.
    #[arg(long, default_value = "/static/dist/bundle.js")]
    pub bundle_url: String,
}

impl From<LinksArg> for RenderOptions {
    fn from(links: LinksArg) -> Self {
        RenderOptions {
            create_url: links.create_url,
            bundle_url: links.bundle_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Sheet(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Bundler(args) => args.run(),
    }
}
