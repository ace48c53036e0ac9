use anyhow::{anyhow, Result};
use fl_insurance::{pipeline, PipelineConfig};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // PipelineError's message already carries its cause
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout stays empty; logs go to stderr and are quiet unless RUST_LOG says otherwise
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("cannot install logger: {e}"))?;
    info!("startup");

    // ─── 2) run the fixed pipeline in the working directory ──────────
    let config = PipelineConfig::default();
    let summary = pipeline::run(&config)?;
    info!(
        entries = summary.entries,
        counties = summary.distinct_counties,
        "all done"
    );
    Ok(())
}
