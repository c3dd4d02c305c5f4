use super::lanes::{EdgeKind, LaneGraph};
use crate::util::truncate;
use chrono::{DateTime, Utc};
use console::style;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectGraph {
    pub project: String,
    #[serde(flatten)]
    pub graph: LaneGraph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub projects: Vec<ProjectGraph>,
}

/// Lane prefix for every row: `*` marks the commit, `|` a lane carrying an
/// edge past the row, `\` or `/` the row where an edge leaves its child's lane.
/// Edges travel down the parent's lane.
pub fn lane_prefixes(graph: &LaneGraph) -> Vec<String> {
    let mut grid = vec![vec![' '; graph.lane_count]; graph.nodes.len()];

    for edge in &graph.edges {
        let lane = edge.to_lane;
        for row in (edge.from_row + 1)..edge.to_row {
            if grid[row][lane] == ' ' {
                grid[row][lane] = '|';
            }
        }
        if edge.from_lane != lane && edge.from_row + 1 < edge.to_row {
            let marker = if lane > edge.from_lane { '\\' } else { '/' };
            grid[edge.from_row + 1][lane] = marker;
        }
    }
    for node in &graph.nodes {
        grid[node.row][node.lane] = '*';
    }

    grid.into_iter()
        .map(|cells| {
            cells
                .into_iter()
                .flat_map(|c| [c, ' '])
                .collect::<String>()
        })
        .collect()
}

pub fn render_text(project: &str, graph: &LaneGraph) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({} commits, {} lanes)",
        style(project).bold(),
        graph.nodes.len(),
        graph.lane_count
    )];
    for (prefix, node) in lane_prefixes(graph).into_iter().zip(&graph.nodes) {
        let short: String = node.sha.chars().take(8).collect();
        let merges_in = graph
            .edges
            .iter()
            .any(|e| e.from == node.sha && e.kind == EdgeKind::Merge);
        let merge = if node.is_merge || merges_in { " (merge)" } else { "" };
        lines.push(format!(
            "{}{} {} {} {}{}",
            prefix,
            style(short).yellow(),
            style(node.day.as_deref().unwrap_or("----------")).dim(),
            style(node.author.as_deref().unwrap_or("Unknown")).magenta(),
            truncate(node.subject.as_deref().unwrap_or(""), 60),
            merge
        ));
    }
    lines
}
