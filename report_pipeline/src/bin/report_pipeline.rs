use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use report_pipeline::{config, report};

#[derive(Parser)]
#[command(version, about = "Daily anomaly signal reports")]
struct Cli {
    /// Path to the job manifest (TOML). Falls back to the
    /// REPORT_PIPELINE_CONFIG environment variable.
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Derive signals for every job and write the report JSON files.
    Run {
        /// Compute everything but skip writing outputs.
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let manifest_path = match cli.config {
        Some(path) => path,
        None => shared_utils::env::require_env("REPORT_PIPELINE_CONFIG")?,
    };
    let manifest = config::load_manifest_path(&manifest_path)?;

    match cli.cmd {
        Cmd::Run { dry_run } => {
            for (name, job) in &manifest.jobs {
                info!(job = %name, symbol = %job.symbol, "building report");
                let built = report::build_report(job)?;
                if dry_run {
                    info!(job = %name, "dry-run, output not written");
                } else {
                    report::write_report(&built, &job.output)?;
                    info!(job = %name, output = %job.output.display(), "report written");
                }
            }
        }
    }

    Ok(())
}
