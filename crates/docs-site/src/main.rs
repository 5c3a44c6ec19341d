//! RansomStat CTI docs site builder
//!
//! Renders the documentation homepage to static HTML.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use docs_site::build::build_site;
use docs_site::config::{FileConfig, SiteSettings};
use docs_site::render_features;

#[derive(Parser, Debug)]
#[command(name = "docs-site")]
#[command(about = "Static homepage renderer for the RansomStat CTI documentation site")]
struct Args {
    /// Output directory for the rendered site
    #[arg(short, long, default_value = "./build", global = true)]
    out_dir: PathBuf,

    /// Optional site.toml with overrides for name, tagline, base_url, etc.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the homepage into the output directory (default)
    Build,

    /// Print the feature section HTML to stdout
    Features,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    // Logs go to stderr, stdout carries rendered HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<SiteSettings> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading site config");
            Ok(FileConfig::load(path)?.into_settings())
        }
        None => Ok(SiteSettings::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command.unwrap_or(Command::Build) {
        Command::Build => {
            let settings = load_settings(args.config.as_ref())?;
            let report = build_site(&args.out_dir, &settings)?;
            info!(
                assets = report.assets_checked,
                bytes = report.bytes_written,
                "built {}",
                report.index_path.display()
            );
        }
        Command::Features => {
            println!("{}", render_features());
        }
    }

    Ok(())
}
