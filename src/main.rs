use anyhow::Result;
use clap::Parser;
use csvcrunch::{diag::LogDiagnostics, job, pipeline};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Batch CSV column statistics and min-max normalization.
///
/// Reads a JSON job file, runs every job against the data directory,
/// and writes a `*_summary.csv` (plus a `*_transformed.csv` when
/// normalization is requested) next to each input.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory containing the input CSV files; outputs land here too.
    data_dir: PathBuf,
    /// JSON job file mapping job keys to job specs.
    job_file: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) parse args + job list ────────────────────────────────────
    let cli = Cli::parse();
    info!(
        data_dir = %cli.data_dir.display(),
        job_file = %cli.job_file.display(),
        "startup"
    );

    // an unreadable or unparseable job file is the one fatal condition
    let jobs = job::load_job_list(&cli.job_file)?;
    info!("{} jobs to process", jobs.len());

    // ─── 3) run the batch, one job at a time ─────────────────────────
    let mut diag = LogDiagnostics;
    let failures = pipeline::run_batch(&cli.data_dir, &jobs, &mut diag);

    info!(failures, "all done");
    Ok(())
}
