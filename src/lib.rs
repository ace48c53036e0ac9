//! Summaries of the Florida insurance sample dataset.
//!
//! Reads `FL_insurance.csv` out of `FL_insurance.csv.zip` and writes three
//! reports next to it: the number of distinct counties (`count.txt`), the
//! total 2012 insured value (`tiv2012.txt`) and the ten counties whose insured
//! value grew the most from 2011 to 2012 (`most_valuable.txt`).

pub mod aggregate;
pub mod archive;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod report;

#[cfg(test)]
pub(crate) mod test_util;

pub use aggregate::CountyDelta;
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{run, PipelineSummary};
pub use record::InsuranceEntry;
