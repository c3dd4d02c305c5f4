use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitdash")]
#[command(about = "Per-contributor dashboards from commit-history CSV files")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Primary CSV path [default: ./data/commits_history_cleaned.csv]")]
    pub data: Option<PathBuf>,

    #[arg(long, global = true, help = "CSV file to use when the primary path cannot be read")]
    pub file: Option<PathBuf>,

    #[arg(long, global = true, help = "JSON file of per-person display overrides keyed by id (p1, p2, ...)")]
    pub overrides: Option<PathBuf>,

    #[arg(long, global = true, help = "Only show persons whose name contains this text")]
    pub person: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-person summary: commits, repos, top language, naming convention share
    People {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Weekday x hour activity heatmaps
    Heat {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Commits per project, grouped by person
    Projects {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Commit timelines (cumulative by default) or weekday totals
    Series {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long, help = "Show raw per-day counts instead of running totals")]
        per_day: bool,

        #[arg(long, help = "Sum commits by weekday instead of by day")]
        weekday: bool,
    },
    /// Lane-assigned commit graph per project
    Graph {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Only graph projects whose name contains this text")]
        project: Option<String>,
    },
    /// Dump the parsed rows
    Export {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Interactive terminal dashboard
    #[command(alias = "tui", alias = "ui")]
    Dashboard,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose);

        match self.command {
            Commands::People { json, ndjson } => crate::roster::exec(self.common, json, ndjson),
            Commands::Heat { json, ndjson } => crate::heat::exec(self.common, json, ndjson),
            Commands::Projects { json, ndjson } => crate::projects::exec(self.common, json, ndjson),
            Commands::Series { json, ndjson, per_day, weekday } => {
                crate::series::exec(self.common, json, ndjson, per_day, weekday)
            }
            Commands::Graph { json, project } => crate::graph::exec(self.common, json, project),
            Commands::Export { json, ndjson } => crate::export::exec(self.common, json, ndjson),
            Commands::Dashboard => crate::tui::run(&self.common).map_err(|e| anyhow::anyhow!(e)),
        }
    }
}
