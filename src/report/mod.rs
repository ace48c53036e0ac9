// src/report/mod.rs
use std::{fs, path::Path};
use tracing::debug;

use crate::aggregate::CountyDelta;
use crate::error::{PipelineError, Result};

/// Header of the ranking report. The label says `country` although the rows
/// are counties; downstream readers expect it verbatim.
pub const MOST_VALUABLE_HEADER: &str = "country,value";

pub fn render_count(count: usize) -> String {
    count.to_string()
}

pub fn render_tiv2012(total: f64) -> String {
    format_amount(total)
}

pub fn render_most_valuable(rows: &[CountyDelta]) -> String {
    let mut out = String::with_capacity(16 + rows.len() * 32);
    out.push_str(MOST_VALUABLE_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.county);
        out.push(',');
        out.push_str(&format_amount(row.delta));
        out.push('\n');
    }
    out
}

/// Two fraction digits with `.` as separator, rounded half-up.
///
/// Rounding is applied to the shortest decimal form that round-trips to
/// `value`, not to its exact binary expansion, so `0.125` gives `0.13` and
/// `1.005` gives `1.01`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }

    // f64's Display is the shortest round-trip form and never uses an exponent
    let shortest = value.to_string();
    let (negative, digits) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - 2;
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| b as char));
    out.push('.');
    out.extend(kept[split..].iter().map(|&b| b as char));
    out
}

/// Create or truncate `path` and write `contents` to it.
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}
