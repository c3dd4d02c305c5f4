pub mod aggregate;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod export;
pub mod graph;
pub mod heat;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod people;
pub mod projects;
pub mod roster;
pub mod series;
pub mod tui;
pub mod util;
