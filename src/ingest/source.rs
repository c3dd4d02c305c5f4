use super::parse::{parse_row, RawRow};
use crate::error::{DashError, Result};
use crate::model::CommitRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "./data/commits_history_cleaned.csv";

/// Reads every row from a CSV stream. Rows the CSV layer cannot decode at all
/// are skipped; only an unreadable stream is an error.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<CommitRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    // Surface header problems (e.g. invalid UTF-8) as a load failure.
    csv_reader.headers()?;

    let mut rows = Vec::new();
    for (line, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(raw) => rows.push(parse_row(raw)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => tracing::trace!(line = line + 2, error = %e, "skipping undecodable row"),
        }
    }
    Ok(rows)
}

pub fn read_csv_file(path: &Path) -> Result<Vec<CommitRecord>> {
    let file = File::open(path)?;
    read_rows(file)
}

/// Where rows come from: a primary path and an optional user-supplied fallback.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub primary: PathBuf,
    pub fallback: Option<PathBuf>,
}

impl DataSource {
    pub fn new(primary: Option<PathBuf>, fallback: Option<PathBuf>) -> Self {
        Self {
            primary: primary.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            fallback,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub rows: Vec<CommitRecord>,
    pub path: PathBuf,
}

impl Loaded {
    pub fn label(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    pub fn status(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.label());
        format!("✓ {} · {} rows", name, self.rows.len())
    }
}

/// Tries the primary path, then the fallback. Failures are logged; the error
/// returned names every path tried.
pub fn load(source: &DataSource, show_progress: bool) -> Result<Loaded> {
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut tried = Vec::new();
    let candidates = std::iter::once(&source.primary).chain(source.fallback.as_ref());
    for path in candidates {
        pb.set_message(format!("Loading {}...", path.display()));
        tried.push(path.clone());
        match read_csv_file(path) {
            Ok(rows) => {
                pb.finish_and_clear();
                tracing::debug!(path = %path.display(), rows = rows.len(), "loaded commit history");
                return Ok(Loaded {
                    rows,
                    path: path.clone(),
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load CSV");
            }
        }
    }

    pb.finish_and_clear();
    let err = DashError::NoSource { tried };
    tracing::error!(error = %err, "Failed to load CSV");
    Err(err)
}

/// Status line shown when nothing could be loaded.
pub fn failure_status() -> String {
    "⚠️ Unable to load the CSV (pass --file <path> to pick a file)".to_string()
}
