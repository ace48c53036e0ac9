// src/test_util.rs
use anyhow::Result;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

pub(crate) const HEADER: &str = "policyID,statecode,county,eq_site_limit,hu_site_limit,fl_site_limit,fr_site_limit,tiv_2012,tiv_2011";

pub(crate) fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fl_insurance=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// One CSV row in the source layout: county at 2, tiv2012 at 7, tiv2011 at 8.
pub(crate) fn row(policy: u32, county: &str, tiv2012: &str, tiv2011: &str) -> String {
    format!("{policy},FL,{county},0,0,0,0,{tiv2012},{tiv2011}")
}

/// Zip `members` (name, contents) into an in-memory archive.
pub(crate) fn zip_bytes(members: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, contents) in members {
            zip.start_file(*name, options)?;
            zip.write_all(contents)?;
        }
        zip.finish()?;
    }
    Ok(buf)
}

pub(crate) fn write_zip(path: &Path, members: &[(&str, &[u8])]) -> Result<()> {
    std::fs::write(path, zip_bytes(members)?)?;
    Ok(())
}

/// A single stored member whose sizes live in a ZIP64 extra field.
///
/// `crc` and `declared_size` are written as given, so callers can describe a
/// member that does not match its bytes.
pub(crate) fn stored_zip64_bytes(name: &str, data: &[u8], crc: u32, declared_size: u64) -> Vec<u8> {
    fn u16le(out: &mut Vec<u8>, v: u16) {
        out.extend_from_slice(&v.to_le_bytes());
    }
    fn u32le(out: &mut Vec<u8>, v: u32) {
        out.extend_from_slice(&v.to_le_bytes());
    }

    // zip64 extra: header id 1, uncompressed size, then compressed size
    let mut extra = Vec::new();
    u16le(&mut extra, 0x0001);
    u16le(&mut extra, 16);
    extra.extend_from_slice(&declared_size.to_le_bytes());
    extra.extend_from_slice(&(data.len() as u64).to_le_bytes());

    const DOS_DATE: u16 = (40 << 9) | (1 << 5) | 1; // 2020-01-01

    let mut out = Vec::new();
    u32le(&mut out, 0x0403_4b50);
    u16le(&mut out, 45);
    u16le(&mut out, 0); // flags
    u16le(&mut out, 0); // stored
    u16le(&mut out, 0);
    u16le(&mut out, DOS_DATE);
    u32le(&mut out, crc);
    u32le(&mut out, u32::MAX);
    u32le(&mut out, u32::MAX);
    u16le(&mut out, name.len() as u16);
    u16le(&mut out, extra.len() as u16);
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(&extra);
    out.extend_from_slice(data);

    let cd_offset = out.len();
    u32le(&mut out, 0x0201_4b50);
    u16le(&mut out, 45); // made by
    u16le(&mut out, 45); // needed
    u16le(&mut out, 0);
    u16le(&mut out, 0);
    u16le(&mut out, 0);
    u16le(&mut out, DOS_DATE);
    u32le(&mut out, crc);
    u32le(&mut out, u32::MAX);
    u32le(&mut out, u32::MAX);
    u16le(&mut out, name.len() as u16);
    u16le(&mut out, extra.len() as u16);
    u16le(&mut out, 0); // comment
    u16le(&mut out, 0); // disk
    u16le(&mut out, 0); // internal attrs
    u32le(&mut out, 0); // external attrs
    u32le(&mut out, 0); // local header offset
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(&extra);
    let cd_size = out.len() - cd_offset;

    u32le(&mut out, 0x0605_4b50);
    u16le(&mut out, 0);
    u16le(&mut out, 0);
    u16le(&mut out, 1);
    u16le(&mut out, 1);
    u32le(&mut out, cd_size as u32);
    u32le(&mut out, cd_offset as u32);
    u16le(&mut out, 0);
    out
}
