//! # af2_render
//!
//! Renders a saved `/report` or `/recent` response to the same HTML the
//! report page shows, for archiving and offline review.
//!
//! ## Usage
//!
//! ```bash
//! # Fragment to stdout
//! curl -s -XPOST localhost:8000/report -d '{"oid":"70000001"}' | af2_render report
//!
//! # Standalone page
//! af2_render report saved.json --document -o acme.html
//! af2_render recent recent.json --config af2.toml
//! ```

mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use render::{Job, Payload};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "af2_render")]
#[command(about = "Render saved af2 report payloads to static HTML")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// TOML file overriding thresholds and link prefixes
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a `/report` response: relations table and score list
    Report(RenderArgs),
    /// Render a `/recent` response: trusted company cards
    Recent(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// JSON payload file; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a standalone HTML page
    #[arg(long)]
    document: bool,

    /// Page title for --document
    #[arg(long, requires = "document")]
    title: Option<String>,
}

impl Command {
    fn into_job(self) -> Job {
        let (payload, args) = match self {
            Command::Report(args) => (Payload::Report, args),
            Command::Recent(args) => (Payload::Recent, args),
        };
        Job {
            payload,
            input: args.input,
            output: args.output,
            document: args.document,
            title: args.title,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("af2_render v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load(args.config.as_deref())?;
    let job = args.command.into_job();
    render::run(&job, &config)
}
