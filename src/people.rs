use crate::aggregate::{
    commits_per_day, heatmap_matrix, language_counts, nomenclature_counts, project_counts,
};
use crate::error::{DashError, Result};
use crate::model::{
    CommitRecord, Count, DayCount, HeatMatrix, NomenclatureTally, Person, PersonSummary,
    UNKNOWN_PERSON, UNKNOWN_REPO,
};
use crate::util::key_or;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub const PERSON_COLORS: [&str; 8] = [
    "#8b5cf6", "#22c55e", "#f59e0b", "#38bdf8", "#f472b6", "#a3e635", "#f97316", "#14b8a6",
];

/// Identity of the contributor behind a row.
pub fn person_key(row: &CommitRecord) -> &str {
    let candidates = [
        row.person.as_deref(),
        row.author_login.as_deref(),
        row.author_name.as_deref(),
    ];
    if let Some(name) = candidates.into_iter().flatten().find(|s| !s.is_empty()) {
        return name;
    }
    match row.repo_full_name.as_deref() {
        Some(full) if full.contains('/') => full.split('/').next().unwrap_or(UNKNOWN_PERSON),
        _ => UNKNOWN_PERSON,
    }
}

/// Hands out colors in first-seen order, cycling through the palette.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: &'static [&'static str],
    assigned: HashMap<String, usize>,
}

impl Palette {
    pub fn new() -> Self {
        Self::with_colors(&PERSON_COLORS)
    }

    pub fn with_colors(colors: &'static [&'static str]) -> Self {
        Self {
            colors,
            assigned: HashMap::new(),
        }
    }

    /// Slot number (0-based) of `name`, assigning the next one on first sight.
    pub fn slot(&mut self, name: &str) -> usize {
        let next = self.assigned.len();
        *self.assigned.entry(name.to_string()).or_insert(next)
    }

    pub fn color(&mut self, name: &str) -> &'static str {
        let slot = self.slot(name);
        if self.colors.is_empty() {
            return "#94a3b8";
        }
        self.colors[slot % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct persons in first-seen order with ids `p1`, `p2`, ...
pub fn build_persons(rows: &[CommitRecord]) -> Vec<Person> {
    let mut palette = Palette::new();
    let mut persons = Vec::new();
    let mut seen = HashSet::new();
    for row in rows {
        let name = person_key(row);
        if !seen.insert(name) {
            continue;
        }
        let color = palette.color(name);
        persons.push(Person {
            id: format!("p{}", persons.len() + 1),
            name: name.to_string(),
            color: color.to_string(),
        });
    }
    persons
}

/// Partitions rows by key in first-seen order, keeping row order inside each group.
fn group_by<'a, F>(rows: &'a [CommitRecord], key: F) -> Vec<(String, Vec<CommitRecord>)>
where
    F: Fn(&'a CommitRecord) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<CommitRecord>)> = Vec::new();
    for row in rows {
        let k = key(row);
        let i = *index.entry(k).or_insert_with(|| {
            groups.push((k.to_string(), Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push(row.clone());
    }
    groups
}

pub fn group_by_person(rows: &[CommitRecord]) -> Vec<(String, Vec<CommitRecord>)> {
    group_by(rows, person_key)
}

pub fn group_by_project(rows: &[CommitRecord]) -> Vec<(String, Vec<CommitRecord>)> {
    group_by(rows, |r| key_or(r.repo_full_name.as_deref(), UNKNOWN_REPO))
}

/// Everything derived for one person on one load.
#[derive(Debug, Clone)]
pub struct PersonView {
    pub person: Person,
    pub rows: Vec<CommitRecord>,
    pub heatmap: HeatMatrix,
    pub languages: Vec<Count>,
    pub nomenclature: NomenclatureTally,
    pub projects: Vec<Count>,
    pub per_day: Vec<DayCount>,
    pub unique_repos: usize,
    pub top_language: Option<String>,
}

impl PersonView {
    pub fn new(person: Person, rows: Vec<CommitRecord>) -> Self {
        let languages = language_counts(&rows);
        let unique_repos = rows
            .iter()
            .map(|r| r.repo_full_name.as_deref())
            .collect::<HashSet<_>>()
            .len();
        Self {
            heatmap: heatmap_matrix(&rows),
            top_language: languages.first().map(|c| c.key.clone()),
            nomenclature: nomenclature_counts(&rows),
            projects: project_counts(&rows),
            per_day: commits_per_day(&rows),
            languages,
            unique_repos,
            person,
            rows,
        }
    }

    pub fn summary(&self, overrides: &PersonOverrides) -> PersonSummary {
        PersonSummary {
            person: self.person.clone(),
            commits: self.rows.len(),
            unique_repos: self.unique_repos,
            top_language: self.top_language.clone(),
            nomenclature: self.nomenclature,
            label: overrides.get(&self.person.id).and_then(|o| o.label.clone()),
        }
    }
}

/// Groups rows per person and aggregates each group.
pub fn build_views(rows: &[CommitRecord]) -> Vec<PersonView> {
    let persons = build_persons(rows);
    let mut groups: HashMap<String, Vec<CommitRecord>> = group_by_person(rows).into_iter().collect();
    persons
        .into_iter()
        .map(|person| {
            let person_rows = groups.remove(&person.name).unwrap_or_default();
            PersonView::new(person, person_rows)
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonOverride {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Per-person display overrides keyed by person id (`p1`, `p2`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonOverrides(HashMap<String, PersonOverride>);

impl PersonOverrides {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DashError::Overrides(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn get(&self, id: &str) -> Option<&PersonOverride> {
        self.0.get(id)
    }

    /// Two-letter badge: the override label's initials, else the name's.
    pub fn badge(&self, person: &Person) -> String {
        let source = self
            .get(&person.id)
            .and_then(|o| o.label.as_deref())
            .unwrap_or(&person.name);
        source.chars().take(2).collect::<String>().to_uppercase()
    }
}
