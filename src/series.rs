use crate::aggregate::{to_cumulative, weekday_totals};
use crate::cli::CommonArgs;
use crate::dataset::Dataset;
use crate::model::{PersonSeries, PersonWeekdays, SeriesOutput, WeekdayOutput, SCHEMA_VERSION};
use crate::people::PersonView;
use crate::util::WEEKDAYS;
use chrono::Utc;
use console::style;

pub fn exec(
    common: CommonArgs,
    json: bool,
    ndjson: bool,
    per_day: bool,
    weekday: bool,
) -> anyhow::Result<()> {
    let dataset = Dataset::open(&common, !(json || ndjson))?;
    let views = dataset.filtered_views(common.person.as_deref());
    let source = dataset.source_label();

    if weekday {
        let totals = weekday_series(&views);
        if json {
            let output = WeekdayOutput {
                version: SCHEMA_VERSION,
                generated_at: Utc::now(),
                source,
                people: totals,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if ndjson {
            for t in &totals {
                println!("{}", serde_json::to_string(t)?);
            }
        } else {
            output_weekdays(&totals);
        }
        return Ok(());
    }

    let cumulative = !per_day;
    let series = person_series(&views, cumulative);
    if json {
        let output = SeriesOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            source,
            cumulative,
            people: series,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ndjson {
        for s in &series {
            println!("{}", serde_json::to_string(s)?);
        }
    } else {
        output_series(&series);
    }
    Ok(())
}

/// Per-person series for the timeline. The cumulative variant is always
/// derived afresh from the per-day series held by the view.
pub fn person_series(views: &[&PersonView], cumulative: bool) -> Vec<PersonSeries> {
    views
        .iter()
        .map(|v| PersonSeries {
            person: v.person.clone(),
            cumulative,
            series: if cumulative {
                to_cumulative(&v.per_day)
            } else {
                v.per_day.clone()
            },
        })
        .collect()
}

pub fn weekday_series(views: &[&PersonView]) -> Vec<PersonWeekdays> {
    views
        .iter()
        .map(|v| PersonWeekdays {
            person: v.person.clone(),
            totals: weekday_totals(&v.per_day),
        })
        .collect()
}

fn output_series(series: &[PersonSeries]) {
    if series.iter().all(|s| s.series.is_empty()) {
        println!("No data to display");
        return;
    }
    let title = if series.first().is_some_and(|s| s.cumulative) {
        "Number of commits (cumulative)"
    } else {
        "Number of commits (per day)"
    };
    println!("{}", style(title).bold());
    println!("{}", "─".repeat(50));
    for s in series {
        println!("{}", style(&s.person.name).bold());
        for point in &s.series {
            println!("  {} {:>6}", style(&point.day).dim(), point.count);
        }
    }
}

fn output_weekdays(totals: &[PersonWeekdays]) {
    if totals.is_empty() {
        println!("No data to display");
        return;
    }
    println!("{}", style("Commits by weekday (by person)").bold());
    print!("{:<20}", "");
    for day in WEEKDAYS {
        print!("{day:>6}");
    }
    println!();
    for t in totals {
        print!("{:<20}", crate::util::truncate(&t.person.name, 20));
        for v in t.totals {
            print!("{v:>6}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitRecord;
    use crate::people::build_views;
    use crate::util::parse_day;
    use pretty_assertions::assert_eq;

    fn row(day: &str) -> CommitRecord {
        CommitRecord {
            author_name: Some("ann".into()),
            commit_day: Some(day.into()),
            commit_date: parse_day(day),
            ..Default::default()
        }
    }

    #[test]
    fn toggling_cumulative_never_double_accumulates() {
        let views = build_views(&[
            row("2024-01-01"),
            row("2024-01-01"),
            row("2024-01-01"),
            row("2024-01-02"),
            row("2024-01-02"),
        ]);
        let refs: Vec<&PersonView> = views.iter().collect();

        let on = person_series(&refs, true);
        let off = person_series(&refs, false);
        let on_again = person_series(&refs, true);

        let counts = |s: &[PersonSeries]| s[0].series.iter().map(|p| p.count).collect::<Vec<_>>();
        assert_eq!(counts(&on), vec![3, 5]);
        assert_eq!(counts(&off), vec![3, 2]);
        assert_eq!(counts(&on_again), vec![3, 5]);
    }

    #[test]
    fn weekday_totals_per_person() {
        let views = build_views(&[row("2024-01-01"), row("2024-01-08"), row("2024-01-07")]);
        let refs: Vec<&PersonView> = views.iter().collect();
        let totals = weekday_series(&refs);
        assert_eq!(totals[0].totals, [2, 0, 0, 0, 0, 0, 1]);
    }
}
