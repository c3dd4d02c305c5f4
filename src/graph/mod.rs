pub mod exec;
pub mod lanes;
pub mod output;

pub use exec::{exec, project_graphs};
pub use lanes::{assign_lanes, Edge, EdgeKind, LaneGraph, LaneNode};
pub use output::{lane_prefixes, render_text, GraphOutput, ProjectGraph};
