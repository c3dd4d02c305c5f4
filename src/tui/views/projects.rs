use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use super::super::{draw::person_color, state::TuiState};
use super::{header_cell, truncate};
use crate::people::PersonView;
use crate::projects::compute_projects;

const BAR_WIDTH: usize = 24;

/// Grouped horizontal bars: one block per project, one bar per visible person.
pub fn draw_projects_view(f: &mut Frame, area: Rect, views: &[PersonView], state: &TuiState) {
    let visible: Vec<&PersonView> = state
        .filtered_indices
        .iter()
        .filter_map(|&i| views.get(i))
        .collect();
    let table = compute_projects(&visible);
    let max = table
        .iter()
        .flat_map(|r| r.counts.iter().copied())
        .max()
        .unwrap_or(0);

    let rows: Vec<Row> = table
        .iter()
        .map(|r| {
            let bars: Vec<Line> = visible
                .iter()
                .zip(&r.counts)
                .map(|(view, &count)| {
                    let filled = if max == 0 {
                        0
                    } else {
                        ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
                    };
                    Line::from(vec![
                        Span::styled(
                            "█".repeat(filled),
                            Style::default().fg(person_color(&view.person.color)),
                        ),
                        Span::styled(format!(" {count}"), Style::default().fg(Color::Gray)),
                    ])
                })
                .collect();
            let height = bars.len().max(1) as u16;
            Row::new(vec![
                Cell::from(truncate(&r.project, 38)),
                Cell::from(bars),
            ])
            .height(height)
            .bottom_margin(1)
        })
        .collect();

    let widget = Table::new(rows, [Constraint::Length(40), Constraint::Min(10)])
        .header(Row::new([
            header_cell("Project", Color::Yellow),
            header_cell("Commits per person", Color::Green),
        ]))
        .block(
            Block::default()
                .title("Commits per repo (grouped bars)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(widget, area);
}
