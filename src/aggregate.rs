//! Pure aggregations over commit rows. None of these fail: rows missing the
//! field an aggregation keys on are left out of that aggregation only.

use crate::model::{
    CommitRecord, Count, DayCount, HeatMatrix, NomenclatureTally, UNKNOWN_LANGUAGE, UNKNOWN_REPO,
};
use crate::util::{clamp_hour, key_or, weekday_index};
use std::collections::HashMap;

/// Weekday x hour commit counts. Rows need both a parseable day and an hour.
pub fn heatmap_matrix(rows: &[CommitRecord]) -> HeatMatrix {
    let mut matrix = [[0u32; 24]; 7];
    for row in rows {
        let (Some(date), Some(hour)) = (row.commit_date, row.commit_hour) else {
            continue;
        };
        matrix[weekday_index(&date)][clamp_hour(hour)] += 1;
    }
    matrix
}

/// Counts keys in first-seen order, then sorts descending. The sort is stable,
/// so equal counts keep first-seen order.
fn ranked<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<Count> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<Count> = Vec::new();
    for key in keys {
        match index.get(key) {
            Some(&i) => counts[i].value += 1,
            None => {
                index.insert(key, counts.len());
                counts.push(Count {
                    key: key.to_string(),
                    value: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts
}

pub fn language_counts(rows: &[CommitRecord]) -> Vec<Count> {
    ranked(
        rows.iter()
            .map(|r| key_or(r.repo_language.as_deref(), UNKNOWN_LANGUAGE)),
    )
}

pub fn project_counts(rows: &[CommitRecord]) -> Vec<Count> {
    ranked(
        rows.iter()
            .map(|r| key_or(r.repo_full_name.as_deref(), UNKNOWN_REPO)),
    )
}

pub fn nomenclature_counts(rows: &[CommitRecord]) -> NomenclatureTally {
    let compliant = rows.iter().filter(|r| r.nomenclature).count() as u32;
    NomenclatureTally {
        compliant,
        non_compliant: rows.len() as u32 - compliant,
    }
}

/// Commits per distinct day, ascending by date.
pub fn commits_per_day(rows: &[CommitRecord]) -> Vec<DayCount> {
    let mut days: HashMap<&str, DayCount> = HashMap::new();
    for row in rows {
        let (Some(day), Some(date)) = (row.commit_day.as_deref(), row.commit_date) else {
            continue;
        };
        days.entry(day)
            .or_insert_with(|| DayCount {
                day: day.to_string(),
                date,
                count: 0,
            })
            .count += 1;
    }

    let mut series: Vec<DayCount> = days.into_values().collect();
    series.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.day.cmp(&b.day)));
    series
}

/// Running totals of a per-day series, ascending by date.
///
/// Takes the non-cumulative series by reference and returns a new one; apply
/// it once per render to the per-day source, never to its own output.
pub fn to_cumulative(series: &[DayCount]) -> Vec<DayCount> {
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut sum = 0u64;
    for point in &mut sorted {
        sum += point.count;
        point.count = sum;
    }
    sorted
}

/// Sums a per-day series by weekday (Monday first).
pub fn weekday_totals(series: &[DayCount]) -> [u64; 7] {
    let mut totals = [0u64; 7];
    for point in series {
        totals[weekday_index(&point.date)] += point.count;
    }
    totals
}

/// Union of projects across several rankings, in first-seen order, with one
/// count column per ranking (zero where a ranking lacks the project).
pub fn project_matrix(rankings: &[&[Count]]) -> Vec<(String, Vec<u32>)> {
    let mut table: Vec<(String, Vec<u32>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (col, ranking) in rankings.iter().enumerate() {
        for count in ranking.iter() {
            let row = *index.entry(count.key.as_str()).or_insert_with(|| {
                table.push((count.key.clone(), vec![0; rankings.len()]));
                table.len() - 1
            });
            table[row].1[col] = count.value;
        }
    }
    table
}

pub fn max_cell(matrix: &HeatMatrix) -> u32 {
    matrix.iter().flatten().copied().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::parse_day;
    use pretty_assertions::assert_eq;

    fn row(day: Option<&str>, hour: Option<i64>) -> CommitRecord {
        CommitRecord {
            commit_day: day.map(str::to_string),
            commit_date: day.and_then(parse_day),
            commit_hour: hour,
            ..Default::default()
        }
    }

    fn with_lang(lang: Option<&str>) -> CommitRecord {
        CommitRecord {
            repo_language: lang.map(str::to_string),
            ..Default::default()
        }
    }

    fn day(day: &str, count: u64) -> DayCount {
        DayCount {
            day: day.to_string(),
            date: parse_day(day).unwrap(),
            count,
        }
    }

    #[test]
    fn heatmap_counts_rows_with_day_and_hour() {
        let rows = vec![
            row(Some("2024-01-01"), Some(9)),
            row(Some("2024-01-01"), Some(9)),
            row(Some("2024-01-07"), Some(23)),
            row(None, Some(3)),
            row(Some("2024-01-02"), None),
            row(Some("garbage"), Some(4)),
        ];
        let m = heatmap_matrix(&rows);
        assert_eq!(m.len(), 7);
        assert!(m.iter().all(|r| r.len() == 24));
        assert_eq!(m[0][9], 2);
        assert_eq!(m[6][23], 1);
        assert_eq!(m.iter().flatten().sum::<u32>(), 3);
    }

    #[test]
    fn heatmap_clamps_out_of_range_hours() {
        let rows = vec![row(Some("2024-01-03"), Some(-5)), row(Some("2024-01-03"), Some(30))];
        let m = heatmap_matrix(&rows);
        assert_eq!(m[2][0], 1);
        assert_eq!(m[2][23], 1);
    }

    #[test]
    fn empty_input_gives_zero_matrix() {
        let m = heatmap_matrix(&[]);
        assert_eq!(max_cell(&m), 0);
    }

    #[test]
    fn languages_rank_descending_with_unknown_bucket() {
        let rows = vec![
            with_lang(Some("Python")),
            with_lang(Some(" Rust ")),
            with_lang(Some("Rust")),
            with_lang(None),
            with_lang(Some("  ")),
            with_lang(Some("Go")),
        ];
        let counts = language_counts(&rows);
        assert_eq!(
            counts,
            vec![
                Count { key: "Rust".into(), value: 2 },
                Count { key: "Unknown".into(), value: 2 },
                Count { key: "Python".into(), value: 1 },
                Count { key: "Go".into(), value: 1 },
            ]
        );
        assert!(counts.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!(counts.iter().map(|c| c.value as usize).sum::<usize>(), rows.len());
    }

    #[test]
    fn projects_default_to_unknown_repo() {
        let rows = vec![
            CommitRecord {
                repo_full_name: Some("acme/a".into()),
                ..Default::default()
            },
            CommitRecord::default(),
            CommitRecord::default(),
        ];
        let counts = project_counts(&rows);
        assert_eq!(counts[0], Count { key: "unknown-repo".into(), value: 2 });
        assert_eq!(counts[1], Count { key: "acme/a".into(), value: 1 });
    }

    #[test]
    fn nomenclature_always_has_two_buckets() {
        let empty = nomenclature_counts(&[]);
        assert_eq!(empty.buckets().len(), 2);
        assert_eq!(empty.total(), 0);

        let rows = vec![
            CommitRecord { nomenclature: true, ..Default::default() },
            CommitRecord::default(),
            CommitRecord { nomenclature: true, ..Default::default() },
        ];
        let tally = nomenclature_counts(&rows);
        assert_eq!(tally, NomenclatureTally { compliant: 2, non_compliant: 1 });
        assert_eq!(tally.total() as usize, rows.len());
        assert_eq!(tally.compliant_pct(), 67);
    }

    #[test]
    fn per_day_series_is_ascending_and_distinct() {
        let rows = vec![
            row(Some("2024-01-03"), None),
            row(Some("2024-01-01"), Some(1)),
            row(Some("2024-01-03"), Some(2)),
            row(None, Some(2)),
        ];
        let series = commits_per_day(&rows);
        assert_eq!(series, vec![day("2024-01-01", 1), day("2024-01-03", 2)]);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn cumulative_sums_from_the_start() {
        let series = vec![day("2024-01-02", 2), day("2024-01-01", 3)];
        let cumulative = to_cumulative(&series);
        assert_eq!(cumulative, vec![day("2024-01-01", 3), day("2024-01-02", 5)]);
        // the source is left untouched, so recomputing from it is stable
        assert_eq!(to_cumulative(&series), cumulative);
    }

    #[test]
    fn weekday_totals_sum_counts() {
        let series = vec![day("2024-01-01", 3), day("2024-01-08", 2), day("2024-01-06", 1)];
        assert_eq!(weekday_totals(&series), [5, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn project_matrix_unions_in_first_seen_order() {
        let a = vec![Count { key: "x".into(), value: 4 }, Count { key: "y".into(), value: 1 }];
        let b = vec![Count { key: "z".into(), value: 2 }, Count { key: "x".into(), value: 1 }];
        let m = project_matrix(&[&a, &b]);
        assert_eq!(
            m,
            vec![
                ("x".to_string(), vec![4, 1]),
                ("y".to_string(), vec![1, 0]),
                ("z".to_string(), vec![0, 2]),
            ]
        );
    }
}
