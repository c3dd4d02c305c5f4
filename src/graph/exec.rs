use super::output::{render_text, GraphOutput, ProjectGraph};
use super::assign_lanes;
use crate::cli::CommonArgs;
use crate::dataset::Dataset;
use crate::model::{CommitRecord, SCHEMA_VERSION};
use crate::people::group_by_project;
use chrono::Utc;

pub fn exec(common: CommonArgs, json: bool, project: Option<String>) -> anyhow::Result<()> {
    let dataset = Dataset::open(&common, !json)?;
    let graphs = project_graphs(&dataset.rows, project.as_deref());

    if json {
        let output = GraphOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            source: dataset.source_label(),
            projects: graphs,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if graphs.is_empty() {
        println!("No data to display");
        return Ok(());
    }
    for pg in &graphs {
        for line in render_text(&pg.project, &pg.graph) {
            println!("{line}");
        }
        println!();
    }
    Ok(())
}

/// One lane layout per project, projects in first-seen order. `filter` keeps
/// projects whose name contains it (case-insensitive).
pub fn project_graphs(rows: &[CommitRecord], filter: Option<&str>) -> Vec<ProjectGraph> {
    let needle = filter.map(str::to_lowercase);
    group_by_project(rows)
        .into_iter()
        .filter(|(name, _)| match &needle {
            Some(n) => name.to_lowercase().contains(n),
            None => true,
        })
        .map(|(project, commits)| ProjectGraph {
            graph: assign_lanes(&commits),
            project,
        })
        .collect()
}
