// src/aggregate/mod.rs
use std::collections::{HashMap, HashSet};

use crate::record::InsuranceEntry;

/// Summed year-over-year change for one county.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyDelta {
    pub county: String,
    pub delta: f64,
}

/// Number of distinct county names (exact, case-sensitive).
pub fn distinct_counties(entries: &[InsuranceEntry]) -> usize {
    entries
        .iter()
        .map(InsuranceEntry::county)
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of `tiv2012` in input order.
pub fn tiv2012_total(entries: &[InsuranceEntry]) -> f64 {
    // fold from +0.0; `Sum for f64` starts at -0.0, which would render as "-0.00"
    entries.iter().map(InsuranceEntry::tiv2012).fold(0.0, |acc, v| acc + v)
}

/// Counties ranked by summed `tiv2012 - tiv2011`, largest first, at most `limit` of them.
///
/// Groups are kept in first-seen order and sorted stably, so equal deltas keep
/// the order in which their counties first appeared.
pub fn top_valuation_changes(entries: &[InsuranceEntry], limit: usize) -> Vec<CountyDelta> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CountyDelta> = Vec::new();

    for entry in entries {
        let idx = *slots.entry(entry.county()).or_insert_with(|| {
            groups.push(CountyDelta {
                county: entry.county().to_string(),
                delta: 0.0,
            });
            groups.len() - 1
        });
        groups[idx].delta += entry.delta();
    }

    groups.sort_by(|a, b| b.delta.total_cmp(&a.delta));
    groups.truncate(limit);
    groups
}
