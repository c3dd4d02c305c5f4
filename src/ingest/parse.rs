use crate::model::CommitRecord;
use crate::util::parse_day;
use serde::{Deserialize, Deserializer};

pub const PARENT_SEPARATOR: char = ';';

/// A CSV row exactly as read. Every column is optional so header-only, ragged
/// and partial files still deserialize.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub repo_full_name: Option<String>,
    pub sha: Option<String>,
    pub parent_shas: Option<String>,
    pub branch: Option<String>,
    pub person: Option<String>,
    pub author_login: Option<String>,
    pub author_name: Option<String>,
    pub repo_private: Option<String>,
    pub repo_language: Option<String>,
    pub repo_stars: Option<String>,
    pub repo_forks: Option<String>,
    pub commit_day: Option<String>,
    /// `Some("")` for a blank cell, `None` only when the column is missing.
    #[serde(deserialize_with = "present_cell")]
    pub commit_hour: Option<String>,
    pub is_merge: Option<String>,
    pub message_type: Option<String>,
    pub message_argument: Option<String>,
    pub message_message: Option<String>,
    pub nomenclature: Option<String>,
}

/// Literal spellings accepted as `true` for each boolean column.
/// Matching is done on the trimmed value.
#[derive(Debug, Clone, Copy)]
pub struct BoolPolicy {
    pub literals: &'static [&'static str],
    pub ignore_case: bool,
    pub numeric_one: bool,
}

pub const IS_MERGE_POLICY: BoolPolicy = BoolPolicy {
    literals: &["true", "1"],
    ignore_case: true,
    numeric_one: false,
};

pub const NOMENCLATURE_POLICY: BoolPolicy = BoolPolicy {
    literals: &["1"],
    ignore_case: false,
    numeric_one: true,
};

impl BoolPolicy {
    pub fn accepts(&self, raw: Option<&str>) -> bool {
        let Some(value) = raw.map(str::trim) else {
            return false;
        };
        let literal = self.literals.iter().any(|lit| {
            if self.ignore_case {
                lit.eq_ignore_ascii_case(value)
            } else {
                *lit == value
            }
        });
        literal || (self.numeric_one && value.parse::<f64>().is_ok_and(|n| n == 1.0))
    }
}

fn present_cell<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    String::deserialize(de).map(Some)
}

fn text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Integers with a tolerance for `"7.0"` style floats; anything else is absent.
fn number(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<i64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && n.fract() == 0.0)
            .map(|n| n as i64)
    })
}

/// Hour of day: a blank cell reads as hour 0; unparseable text or a missing
/// column is absent.
fn hour(raw: Option<&str>) -> Option<i64> {
    match raw.map(str::trim) {
        Some("") => Some(0),
        other => number(other),
    }
}

pub fn split_parents(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("")
        .split(PARENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns a raw row into a typed record. Never fails: malformed optional
/// fields become absent values.
pub fn parse_row(raw: RawRow) -> CommitRecord {
    let commit_hour = hour(raw.commit_hour.as_deref());
    let repo_stars = number(raw.repo_stars.as_deref());
    let repo_forks = number(raw.repo_forks.as_deref());
    let parent_shas = split_parents(raw.parent_shas.as_deref());
    let is_merge = IS_MERGE_POLICY.accepts(raw.is_merge.as_deref());
    let nomenclature = NOMENCLATURE_POLICY.accepts(raw.nomenclature.as_deref());

    let commit_day = text(raw.commit_day);
    let commit_date = commit_day.as_deref().and_then(parse_day);

    CommitRecord {
        repo_full_name: text(raw.repo_full_name),
        sha: text(raw.sha).unwrap_or_default(),
        parent_shas,
        branch: text(raw.branch),
        person: text(raw.person),
        author_login: text(raw.author_login),
        author_name: text(raw.author_name),
        repo_private: text(raw.repo_private),
        repo_language: text(raw.repo_language),
        repo_stars,
        repo_forks,
        commit_day,
        commit_date,
        commit_hour,
        is_merge,
        message_type: text(raw.message_type),
        message_argument: text(raw.message_argument),
        message_message: text(raw.message_message),
        nomenclature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn is_merge_accepts_true_in_any_case_and_one() {
        for v in ["true", "TRUE", "True", "1", " true "] {
            assert!(IS_MERGE_POLICY.accepts(Some(v)), "{v}");
        }
        for v in ["false", "0", "yes", "", "1.0"] {
            assert!(!IS_MERGE_POLICY.accepts(Some(v)), "{v}");
        }
        assert!(!IS_MERGE_POLICY.accepts(None));
    }

    #[test]
    fn nomenclature_accepts_one_as_text_or_number() {
        assert!(NOMENCLATURE_POLICY.accepts(Some("1")));
        assert!(NOMENCLATURE_POLICY.accepts(Some("1.0")));
        assert!(!NOMENCLATURE_POLICY.accepts(Some("true")));
        assert!(!NOMENCLATURE_POLICY.accepts(Some("0")));
    }

    #[test]
    fn parents_are_split_and_trimmed() {
        assert_eq!(split_parents(Some("a; b;;c ")), vec!["a", "b", "c"]);
        assert!(split_parents(Some("")).is_empty());
        assert!(split_parents(None).is_empty());
    }

    #[test]
    fn malformed_numbers_become_absent() {
        let row = parse_row(RawRow {
            commit_hour: Some("noon".into()),
            repo_stars: Some("12".into()),
            repo_forks: Some("3.0".into()),
            commit_day: Some("not-a-day".into()),
            ..Default::default()
        });
        assert_eq!(row.commit_hour, None);
        assert_eq!(row.repo_stars, Some(12));
        assert_eq!(row.repo_forks, Some(3));
        assert_eq!(row.commit_day.as_deref(), Some("not-a-day"));
        assert_eq!(row.commit_date, None);
    }

    #[test]
    fn blank_hour_reads_as_midnight() {
        assert_eq!(hour(Some("")), Some(0));
        assert_eq!(hour(Some("  ")), Some(0));
        assert_eq!(hour(Some("14")), Some(14));
        assert_eq!(hour(Some("noon")), None);
        assert_eq!(hour(None), None);
    }

    #[test]
    fn blank_text_is_absent() {
        let row = parse_row(RawRow {
            repo_language: Some("   ".into()),
            sha: Some(" abc ".into()),
            ..Default::default()
        });
        assert_eq!(row.repo_language, None);
        assert_eq!(row.sha, "abc");
    }
}
