use crate::cli::CommonArgs;
use crate::dataset::Dataset;
use crate::model::{CommitRecord, ExportOutput, SCHEMA_VERSION};
use crate::people::person_key;
use crate::util::truncate;
use chrono::Utc;
use console::style;
use std::collections::HashSet;

pub const PREVIEW_COLUMNS: [&str; 11] = [
    "repo_full_name",
    "sha",
    "parent_shas",
    "branch",
    "author_name",
    "commit_day",
    "commit_hour",
    "message_type",
    "message_argument",
    "message_message",
    "nomenclature",
];
pub const PREVIEW_ROWS: usize = 6;
const PLACEHOLDER: &str = "—";
const PREVIEW_CELL_WIDTH: usize = 24;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let dataset = Dataset::open(&common, !(json || ndjson))?;
    let export_data = prepare_export_data(&dataset.rows, common.person.as_deref());

    if json {
        output_json(&export_data, &dataset.source_label())?;
    } else if ndjson {
        output_ndjson(&export_data)?;
    } else {
        output_summary(&export_data, &dataset.status)?;
    }

    Ok(())
}

/// Rows in input order, optionally narrowed to persons matching `person`.
fn prepare_export_data(rows: &[CommitRecord], person: Option<&str>) -> Vec<CommitRecord> {
    let needle = person.map(str::to_lowercase);
    rows.iter()
        .filter(|r| match &needle {
            Some(n) => person_key(r).to_lowercase().contains(n),
            None => true,
        })
        .cloned()
        .collect()
}

fn output_json(export_data: &[CommitRecord], source: &str) -> anyhow::Result<()> {
    let output = ExportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: source.to_string(),
        entries: export_data.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(export_data: &[CommitRecord]) -> anyhow::Result<()> {
    for entry in export_data {
        println!("{}", serde_json::to_string(entry)?);
    }
    Ok(())
}

fn output_summary(export_data: &[CommitRecord], status: &str) -> anyhow::Result<()> {
    println!("{}", style("Export Summary").bold());
    println!("{}", style(status).dim());
    println!("{}", "─".repeat(50));

    let total_commits = export_data.len();
    let merges = export_data.iter().filter(|r| r.is_merge).count();
    let compliant = export_data.iter().filter(|r| r.nomenclature).count();
    let undated = export_data.iter().filter(|r| r.commit_date.is_none()).count();

    let unique_people: HashSet<_> = export_data.iter().map(person_key).collect();
    let unique_repos: HashSet<_> = export_data
        .iter()
        .map(|r| r.repo_full_name.as_deref())
        .collect();

    println!("Total commits: {}", style(total_commits).cyan());
    println!("Merge commits: {}", style(merges).cyan());
    println!("Naming convention followed: {}", style(compliant).green());
    println!("Rows without a day: {}", style(undated).red());
    println!("Unique people: {}", style(unique_people.len()).yellow());
    println!("Unique repos: {}", style(unique_repos.len()).yellow());

    let first = export_data.iter().filter_map(|r| r.commit_date).min();
    let last = export_data.iter().filter_map(|r| r.commit_date).max();
    if let (Some(first), Some(last)) = (first, last) {
        println!(
            "Date range: {} to {}",
            style(first.format("%Y-%m-%d")).dim(),
            style(last.format("%Y-%m-%d")).dim()
        );
    }

    println!();
    for line in preview_lines(export_data) {
        println!("{line}");
    }

    println!("\nUse --json or --ndjson flags to export the raw data.");
    Ok(())
}

fn cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// One preview row, cells in [`PREVIEW_COLUMNS`] order.
pub fn preview_cells(row: &CommitRecord) -> Vec<String> {
    vec![
        cell(row.repo_full_name.as_deref()),
        cell(Some(row.sha.as_str())),
        cell(Some(row.parent_shas.join(";").as_str())),
        cell(row.branch.as_deref()),
        cell(row.author_name.as_deref()),
        cell(row.commit_day.as_deref()),
        cell(row.commit_hour.map(|h| h.to_string()).as_deref()),
        cell(row.message_type.as_deref()),
        cell(row.message_argument.as_deref()),
        cell(row.message_message.as_deref()),
        row.nomenclature.to_string(),
    ]
}

/// The first [`PREVIEW_ROWS`] rows as a plain-text table, header first.
pub fn preview_lines(rows: &[CommitRecord]) -> Vec<String> {
    let sample: Vec<Vec<String>> = rows.iter().take(PREVIEW_ROWS).map(preview_cells).collect();
    if sample.is_empty() {
        return vec!["No data loaded.".to_string()];
    }

    let widths: Vec<usize> = PREVIEW_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            sample
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
                .min(PREVIEW_CELL_WIDTH)
        })
        .collect();
    let join = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:<w$}", truncate(c, w)))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![join(PREVIEW_COLUMNS.iter().map(|c| c.to_string()).collect())];
    lines.extend(sample.into_iter().map(join));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn person_filter_is_case_insensitive() {
        let rows = vec![
            CommitRecord { author_name: Some("Ann".into()), sha: "1".into(), ..Default::default() },
            CommitRecord { author_name: Some("Bob".into()), sha: "2".into(), ..Default::default() },
        ];
        let kept = prepare_export_data(&rows, Some("an"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].sha, "1");
        assert_eq!(prepare_export_data(&rows, None).len(), 2);
    }

    #[test]
    fn preview_cells_follow_column_order_with_placeholders() {
        let row = CommitRecord {
            repo_full_name: Some("acme/api".into()),
            sha: "m1".into(),
            parent_shas: vec!["a2".into(), "b1".into()],
            author_name: Some("ann".into()),
            commit_day: Some("2024-01-04".into()),
            commit_hour: Some(12),
            message_message: Some("merge feature".into()),
            nomenclature: true,
            ..Default::default()
        };
        assert_eq!(
            preview_cells(&row),
            vec![
                "acme/api", "m1", "a2;b1", "—", "ann", "2024-01-04", "12", "—", "—",
                "merge feature", "true",
            ]
        );
        assert_eq!(preview_cells(&CommitRecord::default())[6], "—");
    }

    #[test]
    fn preview_caps_rows_and_reports_empty_loads() {
        let rows: Vec<CommitRecord> = (0..9)
            .map(|i| CommitRecord { sha: format!("c{i}"), ..Default::default() })
            .collect();
        let lines = preview_lines(&rows);
        assert_eq!(lines.len(), 1 + PREVIEW_ROWS);
        assert!(lines[0].starts_with("repo_full_name │ sha"));
        assert!(lines[0].ends_with("nomenclature"));
        assert!(lines[6].contains("c5"));
        assert!(!lines.iter().any(|l| l.contains("c6")));

        assert_eq!(preview_lines(&[]), vec!["No data loaded."]);
    }
}
