use crate::cli::CommonArgs;
use crate::dataset::Dataset;
use crate::model::{PeopleOutput, PersonSummary, SCHEMA_VERSION};
use crate::util::truncate;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let dataset = Dataset::open(&common, !(json || ndjson))?;
    let summaries: Vec<PersonSummary> = dataset
        .filtered_views(common.person.as_deref())
        .into_iter()
        .map(|v| v.summary(&dataset.overrides))
        .collect();

    if json {
        let output = PeopleOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            source: dataset.source_label(),
            people: summaries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ndjson {
        for s in &summaries {
            println!("{}", serde_json::to_string(s)?);
        }
    } else {
        eprintln!("{}", style(&dataset.status).dim());
        output_table(&summaries);
    }
    Ok(())
}

fn output_table(summaries: &[PersonSummary]) {
    if summaries.is_empty() {
        println!("No data to display");
        return;
    }
    println!(
        "{:<4} {:<24} {:>8} {:>6} {:<14} {:>12}",
        style("Id").bold(),
        style("Person").bold(),
        style("Commits").bold(),
        style("Repos").bold(),
        style("Top language").bold(),
        style("Naming conv.").bold()
    );
    println!("{}", "─".repeat(74));
    for s in summaries {
        let name = s.label.as_deref().unwrap_or(&s.person.name);
        println!(
            "{:<4} {:<24} {:>8} {:>6} {:<14} {:>11}%",
            s.person.id,
            truncate(name, 24),
            s.commits,
            s.unique_repos,
            truncate(s.top_language.as_deref().unwrap_or("Unknown"), 14),
            s.nomenclature.compliant_pct()
        );
    }
}
