use crate::model::CommitRecord;
use crate::util::commit_timestamp;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One commit placed on the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneNode {
    pub sha: String,
    /// Rendering row, 0 = newest.
    pub row: usize,
    pub lane: usize,
    pub parents: Vec<String>,
    pub author: Option<String>,
    pub day: Option<String>,
    pub is_merge: bool,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Child to its first parent.
    Regular,
    /// Child to any further parent.
    Merge,
}

/// An edge from a child commit down to one of its parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub from_row: usize,
    pub from_lane: usize,
    pub to_row: usize,
    pub to_lane: usize,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneGraph {
    pub nodes: Vec<LaneNode>,
    pub edges: Vec<Edge>,
    pub lane_count: usize,
}

/// Slots of the lane assigner: each one is free or waiting for a sha.
#[derive(Debug, Default)]
struct ActiveLanes(Vec<Option<String>>);

impl ActiveLanes {
    fn waiting_for(&self, sha: &str) -> Option<usize> {
        self.0.iter().position(|slot| slot.as_deref() == Some(sha))
    }

    fn claim(&mut self, sha: &str) -> usize {
        if let Some(lane) = self.waiting_for(sha) {
            return lane;
        }
        if let Some(lane) = self.0.iter().position(Option::is_none) {
            return lane;
        }
        self.0.push(None);
        self.0.len() - 1
    }

    fn is_awaited(&self, sha: &str) -> bool {
        self.waiting_for(sha).is_some()
    }
}

/// Lays out commits of one project newest-first and assigns each to a lane.
///
/// Commits are ordered by day and hour (missing hour = 00, missing day = epoch),
/// ties keeping input order. A sha seen twice is placed once. Edges are only
/// kept for parents that were placed below their child; parents outside the
/// input, or sorted above the child by skewed clocks, yield no edge.
pub fn assign_lanes(commits: &[CommitRecord]) -> LaneGraph {
    let mut sorted: Vec<&CommitRecord> = commits.iter().collect();
    sorted.sort_by(|a, b| {
        let ta = commit_timestamp(a.commit_date, a.commit_hour);
        let tb = commit_timestamp(b.commit_date, b.commit_hour);
        tb.cmp(&ta)
    });

    let mut active = ActiveLanes::default();
    let mut nodes: Vec<LaneNode> = Vec::with_capacity(sorted.len());
    let mut placed: HashSet<String> = HashSet::new();

    for (idx, commit) in sorted.into_iter().enumerate() {
        let sha = if commit.sha.is_empty() {
            format!("row-{idx}")
        } else {
            commit.sha.clone()
        };
        if !placed.insert(sha.clone()) {
            tracing::trace!(%sha, "duplicate commit row ignored");
            continue;
        }

        let lane = active.claim(&sha);
        let parents = commit.parent_shas.clone();

        active.0[lane] = parents.first().cloned();
        for parent in parents.iter().skip(1) {
            if !active.is_awaited(parent) {
                active.0.push(Some(parent.clone()));
            }
        }

        nodes.push(LaneNode {
            row: nodes.len(),
            lane,
            parents,
            author: commit.author_name.clone(),
            day: commit.commit_day.clone(),
            is_merge: commit.is_merge,
            subject: commit.message_message.clone(),
            sha,
        });
    }

    let positions: HashMap<&str, (usize, usize)> = nodes
        .iter()
        .map(|n| (n.sha.as_str(), (n.row, n.lane)))
        .collect();

    let mut edges = Vec::new();
    for node in &nodes {
        for (i, parent) in node.parents.iter().enumerate() {
            let Some(&(to_row, to_lane)) = positions.get(parent.as_str()) else {
                continue;
            };
            if to_row <= node.row {
                continue;
            }
            edges.push(Edge {
                from: node.sha.clone(),
                to: parent.clone(),
                from_row: node.row,
                from_lane: node.lane,
                to_row,
                to_lane,
                kind: if i == 0 { EdgeKind::Regular } else { EdgeKind::Merge },
            });
        }
    }

    let lane_count = nodes
        .iter()
        .map(|n| n.lane + 1)
        .chain(std::iter::once(active.0.len()))
        .max()
        .unwrap_or(0)
        .max(1);

    LaneGraph {
        nodes,
        edges,
        lane_count,
    }
}
