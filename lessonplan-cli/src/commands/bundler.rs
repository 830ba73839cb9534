//! `lessonplan bundler` — emit webpack.config.js from bundler.yaml.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use lessonplan_bundler::{render_webpack_config, BundlerConfig};

use crate::output::write_if_changed;

/// Emit the webpack configuration for the client bundle.
#[derive(Args, Debug)]
pub struct BundlerArgs {
    /// YAML bundler config. Built-in defaults are used when omitted.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Validate the config and exit.
    #[arg(long, conflicts_with_all = ["out", "dry_run"])]
    pub check: bool,

    /// Report what would be written without touching `--out`.
    #[arg(long, requires = "out")]
    pub dry_run: bool,
}

impl BundlerArgs {
    pub fn run(self) -> Result<()> {
        let config = match self.config.as_deref() {
            Some(path) => BundlerConfig::load(path)
                .with_context(|| format!("cannot load bundler config '{}'", path.display()))?,
            None => BundlerConfig::default(),
        };

        if self.check {
            config.validate().context("bundler config is invalid")?;
            println!(
                "{} bundler config OK (entry {}, port {})",
                "✓".green(),
                config.entry,
                config.dev_server.port
            );
            return Ok(());
        }

        let js = render_webpack_config(&config).context("failed to render webpack config")?;
        match self.out.as_deref() {
            Some(out) => write_if_changed(out, &js, self.dry_run)?.print(),
            None => print!("{js}"),
        }
        Ok(())
    }
}
