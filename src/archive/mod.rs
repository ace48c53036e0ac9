// src/archive/mod.rs
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, instrument, warn};
use zip::{result::ZipError, ZipArchive};

use crate::error::{PipelineError, Result};

const SIZE_HINT_LIMIT: u64 = 64 << 20;

/// Open `zip_path`, find `entry_name` and decode it to text.
///
/// The file handle and archive are dropped before this returns, whether or not
/// the read succeeded. Invalid UTF-8 is replaced rather than rejected.
#[instrument(level = "info", skip(zip_path), fields(zip = %zip_path.as_ref().display()))]
pub fn read_entry_text<P: AsRef<Path>>(zip_path: P, entry_name: &str) -> Result<String> {
    let zip_path = zip_path.as_ref();
    let archive_err = |source: std::io::Error| PipelineError::Archive {
        path: zip_path.to_path_buf(),
        source,
    };

    let file = File::open(zip_path).map_err(archive_err)?;
    let mut archive = ZipArchive::new(file).map_err(|e| archive_err(e.into()))?;
    debug!(members = archive.len(), "opened archive");

    let mut entry = match archive.by_name(entry_name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(PipelineError::EntryNotFound {
                archive: zip_path.to_path_buf(),
                entry: entry_name.to_string(),
            })
        }
        Err(e) => return Err(archive_err(e.into())),
    };

    // the declared size comes from the archive and is only a hint
    let mut buf = Vec::with_capacity(entry.size().min(SIZE_HINT_LIMIT) as usize);
    entry.read_to_end(&mut buf).map_err(archive_err)?;
    debug!(bytes = buf.len(), "read entry");

    let text = match String::from_utf8(buf) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "entry is not valid UTF-8; replacing bad sequences"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(text)
}
