// src/record/mod.rs
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{PipelineError, Result};

pub const COUNTY_COLUMN: usize = 2;
pub const TIV_2012_COLUMN: usize = 7;
pub const TIV_2011_COLUMN: usize = 8;

/// One data row of the insurance dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct InsuranceEntry {
    county: String,
    tiv2012: f64,
    tiv2011: f64,
}

impl InsuranceEntry {
    pub fn new(county: impl Into<String>, tiv2012: f64, tiv2011: f64) -> Self {
        Self {
            county: county.into(),
            tiv2012,
            tiv2011,
        }
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn tiv2012(&self) -> f64 {
        self.tiv2012
    }

    pub fn tiv2011(&self) -> f64 {
        self.tiv2011
    }

    /// Year-over-year change, `tiv2012 - tiv2011`.
    pub fn delta(&self) -> f64 {
        self.tiv2012 - self.tiv2011
    }
}

/// Parse every record after the header into an entry, in input order.
///
/// Records end at `\n`, `\r\n` or a lone `\r`; blank lines carry no record and
/// are skipped. Fields are split on `,` with no quoting. The first record is
/// skipped without inspection. Any bad row fails the whole parse.
pub fn parse_entries(content: &str) -> Result<Vec<InsuranceEntry>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record_no = idx as u64 + 1;
        let record = result.map_err(|e| PipelineError::MalformedRecord {
            record: record_no,
            reason: e.to_string(),
        })?;
        if record_no == 1 {
            continue;
        }
        entries.push(parse_record(record_no, &record)?);
    }
    debug!(rows = entries.len(), "parsed entries");
    Ok(entries)
}

/// Parse one data record. `record_no` is 1-based (the header is record 1) and
/// only used for error messages.
pub fn parse_record(record_no: u64, record: &StringRecord) -> Result<InsuranceEntry> {
    let column = |idx: usize| {
        record.get(idx).ok_or_else(|| PipelineError::MalformedRecord {
            record: record_no,
            reason: format!(
                "expected at least {} columns, found {}",
                TIV_2011_COLUMN + 1,
                record.len()
            ),
        })
    };

    let county = column(COUNTY_COLUMN)?;
    let tiv2012 = parse_amount(record_no, "tiv2012", column(TIV_2012_COLUMN)?)?;
    let tiv2011 = parse_amount(record_no, "tiv2011", column(TIV_2011_COLUMN)?)?;

    Ok(InsuranceEntry::new(county, tiv2012, tiv2011))
}

fn parse_amount(record_no: u64, field: &str, raw: &str) -> Result<f64> {
    let malformed = |reason: String| PipelineError::MalformedRecord {
        record: record_no,
        reason,
    };

    // only ASCII control characters and space count as padding
    let value: f64 = raw
        .trim_matches(|c: char| c <= ' ')
        .parse()
        .map_err(|e| malformed(format!("{field} value {raw:?} is not a number: {e}")))?;
    if !value.is_finite() {
        return Err(malformed(format!("{field} value {raw:?} is not finite")));
    }
    Ok(value)
}
