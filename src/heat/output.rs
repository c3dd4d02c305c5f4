use crate::aggregate::max_cell;
use crate::model::{HeatMatrix, HeatOutput, PersonHeat, SCHEMA_VERSION};
use crate::people::{PersonOverrides, PersonView};
use crate::util::WEEKDAYS;
use anyhow::Result;
use chrono::Utc;
use console::style;

const LEVELS: [&str; 6] = ["·", "▁", "▃", "▅", "▇", "█"];

pub fn person_heat(view: &PersonView) -> PersonHeat {
    PersonHeat {
        person: view.person.clone(),
        matrix: view.heatmap,
        languages: view.languages.clone(),
        nomenclature: view.nomenclature,
    }
}

pub fn output_json(views: &[&PersonView], source: &str) -> Result<()> {
    let output = HeatOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: source.to_string(),
        people: views.iter().map(|v| person_heat(v)).collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(views: &[&PersonView]) -> Result<()> {
    for view in views {
        println!("{}", serde_json::to_string(&person_heat(view))?);
    }
    Ok(())
}

/// Intensity glyph for a cell; zero is always the dot, any activity at least `▁`.
pub fn intensity_char(value: u32, max: u32) -> &'static str {
    if value == 0 || max == 0 {
        return LEVELS[0];
    }
    let steps = (LEVELS.len() - 1) as f64;
    let idx = ((value as f64 / max as f64) * steps).ceil() as usize;
    LEVELS[idx.clamp(1, LEVELS.len() - 1)]
}

pub fn heat_lines(matrix: &HeatMatrix) -> Vec<String> {
    let max = max_cell(matrix);
    let mut lines = Vec::with_capacity(9);
    let ticks: String = (0..24)
        .map(|h| if h % 6 == 0 || h == 23 { format!("{h:<2}") } else { "  ".to_string() })
        .collect();
    lines.push(format!("     {ticks}"));
    for (day, row) in WEEKDAYS.iter().zip(matrix.iter()) {
        let cells: String = row
            .iter()
            .map(|&v| format!("{} ", intensity_char(v, max)))
            .collect();
        lines.push(format!("{day:<4} {cells}"));
    }
    lines
}

pub fn output_heatmap(views: &[&PersonView], overrides: &PersonOverrides) -> Result<()> {
    if views.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    for view in views {
        let name = overrides
            .get(&view.person.id)
            .and_then(|o| o.label.clone())
            .unwrap_or_else(|| view.person.name.clone());
        println!(
            "{} {} {}",
            style(format!("[{}]", overrides.badge(&view.person))).cyan(),
            style(name).bold(),
            style(format!(
                "{} commits · {} repos · top language: {}",
                view.rows.len(),
                view.unique_repos,
                view.top_language.as_deref().unwrap_or("Unknown")
            ))
            .dim()
        );
        println!("{}", "─".repeat(54));
        for line in heat_lines(&view.heatmap) {
            println!("{}", style(line).green());
        }
        let [(ok_label, ok), (ko_label, ko)] = view.nomenclature.buckets();
        println!(
            "Nomenclature: {} {} ({}%), {} {}",
            ok_label,
            style(ok).green(),
            view.nomenclature.compliant_pct(),
            ko_label,
            style(ko).red()
        );
        println!();
    }

    println!("{}", style("Legend").bold());
    println!("  {} commits intensity (weekday x hour)", style(LEVELS.join("")).green());

    Ok(())
}
