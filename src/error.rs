// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot read archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv file not found: {entry} (in {})", archive.display())]
    EntryNotFound { archive: PathBuf, entry: String },

    #[error("malformed record {record}: {reason}")]
    MalformedRecord { record: u64, reason: String },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
