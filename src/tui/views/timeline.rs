use chrono::Datelike;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use super::super::{draw::person_color, state::TuiState};
use crate::model::{DayCount, PersonSeries};
use crate::people::PersonView;
use crate::series::person_series;

fn x_of(point: &DayCount) -> f64 {
    point.date.num_days_from_ce() as f64
}

/// Per-person commit timeline, cumulative or per day depending on the toggle.
pub fn draw_timeline_view(f: &mut Frame, area: Rect, views: &[PersonView], state: &TuiState) {
    let visible: Vec<&PersonView> = state
        .filtered_indices
        .iter()
        .filter_map(|&i| views.get(i))
        .collect();
    // derived from the per-day series on every frame
    let series: Vec<PersonSeries> = person_series(&visible, state.cumulative);

    let title = format!(
        "Number of commits ({}) | 'c' cumulative: {}",
        if state.cumulative { "cumulative" } else { "per day" },
        if state.cumulative { "On" } else { "Off" }
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| s.series.iter().map(|p| (x_of(p), p.count as f64)).collect())
        .collect();
    let all = series.iter().flat_map(|s| s.series.iter());
    let (min_x, max_x) = all.clone().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(x_of(p)), hi.max(x_of(p)))
    });
    let max_y = all.clone().map(|p| p.count).max().unwrap_or(0) as f64;

    if points.iter().all(Vec::is_empty) {
        f.render_widget(Paragraph::new("No data loaded.").block(block), area);
        return;
    }

    let first_day = all.clone().min_by_key(|p| p.date).map(|p| p.day.clone()).unwrap_or_default();
    let last_day = all.max_by_key(|p| p.date).map(|p| p.day.clone()).unwrap_or_default();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(&points)
        .map(|(s, data)| {
            Dataset::default()
                .name(s.person.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(person_color(&s.person.color)))
                .data(data)
        })
        .collect();

    let x_hi = if max_x > min_x { max_x } else { min_x + 1.0 };
    let y_hi = max_y.max(1.0);
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::Gray))
                .bounds([min_x, x_hi])
                .labels(vec![Span::raw(first_day), Span::raw(last_day)]),
        )
        .y_axis(
            Axis::default()
                .title("Commits")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_hi])
                .labels(vec![Span::raw("0"), Span::raw(format!("{}", y_hi as u64))]),
        );
    f.render_widget(chart, area);
}
