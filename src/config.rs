// src/config.rs
use std::path::{Path, PathBuf};

pub const ARCHIVE_FILE: &str = "FL_insurance.csv.zip";
pub const CSV_FILE: &str = "FL_insurance.csv";
pub const COUNT_FILE: &str = "count.txt";
pub const TIV2012_FILE: &str = "tiv2012.txt";
pub const MOST_VALUABLE_FILE: &str = "most_valuable.txt";
pub const TOP_COUNTIES: usize = 10;

/// Where the pipeline reads its archive from and writes its three reports to.
///
/// File names are fixed; only the directory they live in can change.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub work_dir: PathBuf,
    pub archive: String,
    pub entry: String,
    pub count_file: String,
    pub tiv2012_file: String,
    pub most_valuable_file: String,
    pub top_counties: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl PipelineConfig {
    /// The standard file layout rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: dir.into(),
            archive: ARCHIVE_FILE.to_string(),
            entry: CSV_FILE.to_string(),
            count_file: COUNT_FILE.to_string(),
            tiv2012_file: TIV2012_FILE.to_string(),
            most_valuable_file: MOST_VALUABLE_FILE.to_string(),
            top_counties: TOP_COUNTIES,
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.resolve(&self.archive)
    }

    pub fn count_path(&self) -> PathBuf {
        self.resolve(&self.count_file)
    }

    pub fn tiv2012_path(&self) -> PathBuf {
        self.resolve(&self.tiv2012_file)
    }

    pub fn most_valuable_path(&self) -> PathBuf {
        self.resolve(&self.most_valuable_file)
    }

    fn resolve(&self, name: &str) -> PathBuf {
        if self.work_dir == Path::new(".") {
            PathBuf::from(name)
        } else {
            self.work_dir.join(name)
        }
    }
}
