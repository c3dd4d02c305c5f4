use crate::aggregate::project_matrix;
use crate::cli::CommonArgs;
use crate::dataset::Dataset;
use crate::model::{Count, ProjectRow, ProjectsOutput, SCHEMA_VERSION};
use crate::people::PersonView;
use crate::util::truncate;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let dataset = Dataset::open(&common, !(json || ndjson))?;
    let views = dataset.filtered_views(common.person.as_deref());
    let rows = compute_projects(&views);

    if json {
        output_json(&rows, &views, &dataset.source_label())?;
    } else if ndjson {
        output_ndjson(&rows)?;
    } else {
        output_table(&rows, &views)?;
    }

    Ok(())
}

/// Project x person table for grouped bars: projects in first-seen order.
pub fn compute_projects(views: &[&PersonView]) -> Vec<ProjectRow> {
    let rankings: Vec<&[Count]> = views.iter().map(|v| v.projects.as_slice()).collect();
    project_matrix(&rankings)
        .into_iter()
        .map(|(project, counts)| ProjectRow { project, counts })
        .collect()
}

fn output_json(rows: &[ProjectRow], views: &[&PersonView], source: &str) -> anyhow::Result<()> {
    let output = ProjectsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: source.to_string(),
        people: views.iter().map(|v| v.person.clone()).collect(),
        projects: rows.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(rows: &[ProjectRow]) -> anyhow::Result<()> {
    for r in rows {
        println!("{}", serde_json::to_string(r)?);
    }
    Ok(())
}

fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

fn output_table(rows: &[ProjectRow], views: &[&PersonView]) -> anyhow::Result<()> {
    if rows.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    let max = rows
        .iter()
        .flat_map(|r| r.counts.iter().copied())
        .max()
        .unwrap_or(0);

    println!("{}", style("Commits per repo").bold());
    println!("{}", "─".repeat(80));
    for r in rows.iter().take(50) {
        println!("{}", style(truncate(&r.project, 60)).bold());
        for (view, &count) in views.iter().zip(&r.counts) {
            println!(
                "  {:<20} {:>5} {}",
                truncate(&view.person.name, 20),
                count,
                style(bar(count, max, 40)).cyan()
            );
        }
    }
    if rows.len() > 50 {
        println!("\n... and {} more projects", rows.len() - 50);
    }
    Ok(())
}
