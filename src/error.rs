use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] Box<csv::Error>),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No readable data source (tried {tried:?})")]
    NoSource { tried: Vec<PathBuf> },
    #[error("Invalid overrides file: {0}")]
    Overrides(String),
}

// csv::Error is large; keep it boxed
impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        DashError::Csv(Box::new(err))
    }
}
