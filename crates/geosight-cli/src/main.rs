//! GeoSight command line: area estimates, analysis summaries and
//! preliminary DPR generation from JSON inputs.

mod batch;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use config::{AppConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "geosight", version, about = "Preliminary DPR generator for infrastructure projects")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the planar area, bounds and center of a polygon JSON file
    Area {
        /// `[[lat, lon], ...]` or an object with a `coordinates` field.
        polygon: PathBuf,
    },
    /// Dominant land cover, object counts and complexity of an analysis payload
    Summarize {
        analysis: PathBuf,
    },
    /// Generate a report from a project record and an analysis payload
    Report {
        #[arg(short, long)]
        project: PathBuf,

        #[arg(short, long)]
        analysis: PathBuf,

        /// Overrides the configured format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate reports for every job file in a directory, in parallel
    Batch {
        /// Directory of `{"project": ..., "analysis": ...}` JSON files.
        dir: PathBuf,

        #[arg(short, long, default_value = "reports")]
        output: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load_or_default(cli.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cfg.logging.level.as_str())).init();

    match cli.command {
        Commands::Area { polygon } => commands::area(&polygon),
        Commands::Summarize { analysis } => commands::summarize(&analysis),
        Commands::Report { project, analysis, format, output } => commands::report(
            &project,
            &analysis,
            format.unwrap_or(cfg.report.format),
            &cfg.report.header,
            output.as_deref(),
        ),
        Commands::Batch { dir, output, format } => {
            let format = format.unwrap_or(cfg.report.format);
            let summary = batch::run(&dir, &output, format, &cfg.report.header)?;
            eprintln!("{} report(s) written to {}", summary.written, output.display());
            if !summary.failed.is_empty() {
                bail!("{} job(s) failed", summary.failed.len());
            }
            Ok(())
        }
    }
}
