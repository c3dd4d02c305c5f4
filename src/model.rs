use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";
pub const UNKNOWN_REPO: &str = "unknown-repo";
pub const UNKNOWN_PERSON: &str = "Unknown";

/// One typed commit row, produced by [`crate::ingest::parse_row`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub repo_full_name: Option<String>,
    pub sha: String,
    pub parent_shas: Vec<String>,
    pub branch: Option<String>,
    pub person: Option<String>,
    pub author_login: Option<String>,
    pub author_name: Option<String>,
    pub repo_private: Option<String>,
    pub repo_language: Option<String>,
    pub repo_stars: Option<i64>,
    pub repo_forks: Option<i64>,
    /// Day text as it appeared in the input; the grouping key for per-day series.
    pub commit_day: Option<String>,
    pub commit_date: Option<NaiveDate>,
    pub commit_hour: Option<i64>,
    pub is_merge: bool,
    pub message_type: Option<String>,
    pub message_argument: Option<String>,
    pub message_message: Option<String>,
    pub nomenclature: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub key: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomenclatureTally {
    pub compliant: u32,
    pub non_compliant: u32,
}

impl NomenclatureTally {
    pub fn total(&self) -> u32 {
        self.compliant + self.non_compliant
    }

    /// Labelled buckets in display order, always two of them.
    pub fn buckets(&self) -> [(&'static str, u32); 2] {
        [("Compliant", self.compliant), ("Non-compliant", self.non_compliant)]
    }

    pub fn compliant_pct(&self) -> u32 {
        match self.total() {
            0 => 0,
            t => ((self.compliant as f64 / t as f64) * 100.0).round() as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub date: NaiveDate,
    pub count: u64,
}

pub type HeatMatrix = [[u32; 24]; 7];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    pub person: Person,
    pub commits: usize,
    pub unique_repos: usize,
    pub top_language: Option<String>,
    pub nomenclature: NomenclatureTally,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub people: Vec<PersonSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonHeat {
    pub person: Person,
    pub matrix: HeatMatrix,
    pub languages: Vec<Count>,
    pub nomenclature: NomenclatureTally,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub people: Vec<PersonHeat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRow {
    pub project: String,
    /// One count per person, in the same order as `ProjectsOutput::people`.
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub people: Vec<Person>,
    pub projects: Vec<ProjectRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSeries {
    pub person: Person,
    pub cumulative: bool,
    pub series: Vec<DayCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonWeekdays {
    pub person: Person,
    pub totals: [u64; 7],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub cumulative: bool,
    pub people: Vec<PersonSeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub people: Vec<PersonWeekdays>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub entries: Vec<CommitRecord>,
}
