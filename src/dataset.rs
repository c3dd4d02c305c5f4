use crate::cli::CommonArgs;
use crate::ingest::{self, DataSource, Loaded};
use crate::model::CommitRecord;
use crate::people::{build_views, PersonOverrides, PersonView};
use anyhow::Context;
use std::path::PathBuf;

/// One load of the commit history with everything derived from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<CommitRecord>,
    pub source: Option<PathBuf>,
    pub views: Vec<PersonView>,
    pub overrides: PersonOverrides,
    pub status: String,
}

impl Dataset {
    pub fn from_loaded(loaded: Loaded, overrides: PersonOverrides) -> Self {
        let status = loaded.status();
        let views = build_views(&loaded.rows);
        Self {
            rows: loaded.rows,
            source: Some(loaded.path),
            views,
            overrides,
            status,
        }
    }

    pub fn empty(overrides: PersonOverrides, status: String) -> Self {
        Self {
            rows: Vec::new(),
            source: None,
            views: Vec::new(),
            overrides,
            status,
        }
    }

    /// Loads rows and recomputes every per-person view.
    pub fn open(common: &CommonArgs, show_progress: bool) -> anyhow::Result<Self> {
        let overrides = load_overrides(common)?;
        let loaded = ingest::load(&data_source(common), show_progress)
            .context("Failed to load commit history")?;
        Ok(Self::from_loaded(loaded, overrides))
    }

    /// Like [`Dataset::open`] but a load failure becomes an empty dataset with
    /// a status message instead of an error.
    pub fn open_or_empty(common: &CommonArgs, show_progress: bool) -> anyhow::Result<Self> {
        let overrides = load_overrides(common)?;
        match ingest::load(&data_source(common), show_progress) {
            Ok(loaded) => Ok(Self::from_loaded(loaded, overrides)),
            Err(_) => Ok(Self::empty(overrides, ingest::failure_status())),
        }
    }

    pub fn source_label(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Views whose person name contains `filter` (case-insensitive).
    pub fn filtered_views(&self, filter: Option<&str>) -> Vec<&PersonView> {
        let needle = filter.map(str::to_lowercase);
        self.views
            .iter()
            .filter(|v| match &needle {
                Some(n) => v.person.name.to_lowercase().contains(n),
                None => true,
            })
            .collect()
    }
}

pub fn data_source(common: &CommonArgs) -> DataSource {
    DataSource::new(common.data.clone(), common.file.clone())
}

fn load_overrides(common: &CommonArgs) -> anyhow::Result<PersonOverrides> {
    match &common.overrides {
        Some(path) => PersonOverrides::load(path)
            .with_context(|| format!("Failed to read overrides from {}", path.display())),
        None => Ok(PersonOverrides::default()),
    }
}
