// src/pipeline/mod.rs
use std::{path::Path, time::Instant};
use tracing::{info, instrument};

use crate::{
    aggregate::{self, CountyDelta},
    archive,
    config::PipelineConfig,
    error::Result,
    record::{self, InsuranceEntry},
    report,
};

/// What a completed run computed and wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub entries: usize,
    pub distinct_counties: usize,
    pub tiv2012_total: f64,
    pub top_counties: Vec<CountyDelta>,
}

/// Decode `entry_name` from the archive and parse all of its rows.
///
/// The archive is closed again before parsing starts.
pub fn load_entries<P: AsRef<Path>>(zip_path: P, entry_name: &str) -> Result<Vec<InsuranceEntry>> {
    let text = archive::read_entry_text(zip_path, entry_name)?;
    record::parse_entries(&text)
}

/// Load the archive, then write count → tiv2012 sum → ranking, stopping at the first error.
#[instrument(level = "info", skip(config), fields(dir = %config.work_dir.display()))]
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let start = Instant::now();

    // ─── 1) load ─────────────────────────────────────────────────────
    let entries = load_entries(config.archive_path(), &config.entry)?;
    info!(rows = entries.len(), "loaded entries");

    // ─── 2) distinct counties ────────────────────────────────────────
    let distinct_counties = aggregate::distinct_counties(&entries);
    report::write_report(config.count_path(), &report::render_count(distinct_counties))?;
    info!(distinct_counties, "wrote count");

    // ─── 3) tiv2012 total ────────────────────────────────────────────
    let tiv2012_total = aggregate::tiv2012_total(&entries);
    report::write_report(config.tiv2012_path(), &report::render_tiv2012(tiv2012_total))?;
    info!(tiv2012_total, "wrote tiv2012 total");

    // ─── 4) top valuation changes ────────────────────────────────────
    let top_counties = aggregate::top_valuation_changes(&entries, config.top_counties);
    report::write_report(
        config.most_valuable_path(),
        &report::render_most_valuable(&top_counties),
    )?;
    info!(ranked = top_counties.len(), "wrote ranking");

    info!("completed in {:?}", start.elapsed());
    Ok(PipelineSummary {
        entries: entries.len(),
        distinct_counties,
        tiv2012_total,
        top_counties,
    })
}
