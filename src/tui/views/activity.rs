use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use super::super::{
    draw::person_color,
    state::{RightView, TuiState},
};
use crate::graph::{lane_prefixes, ProjectGraph};
use crate::people::PersonView;
use crate::series::weekday_series;
use crate::util::{truncate, WEEKDAYS};

/// Either the per-project commit graph or the weekday bars, per the `v` toggle.
pub fn draw_activity_view(
    f: &mut Frame,
    area: Rect,
    views: &[PersonView],
    graphs: &[ProjectGraph],
    state: &TuiState,
) {
    match state.right_view {
        RightView::GitGraph => draw_graph(f, area, views, graphs, state),
        RightView::WeekdayBars => draw_weekdays(f, area, views, state),
    }
}

fn draw_graph(
    f: &mut Frame,
    area: Rect,
    views: &[PersonView],
    graphs: &[ProjectGraph],
    state: &TuiState,
) {
    let Some(pg) = graphs.get(state.project_selected.min(graphs.len().saturating_sub(1))) else {
        let empty = Paragraph::new("No repositories loaded.")
            .block(Block::default().title("Git graph").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", pg.project),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "({}/{}) {} commits · {} lanes · '['/']' switch repo, 'v' weekday bars",
                state.project_selected.min(graphs.len() - 1) + 1,
                graphs.len(),
                pg.graph.nodes.len(),
                pg.graph.lane_count
            ),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let author_color = |author: Option<&str>| {
        let name = author.unwrap_or("Unknown");
        views
            .iter()
            .find(|v| v.person.name == name)
            .map(|v| person_color(&v.person.color))
            .unwrap_or(Color::Gray)
    };

    let prefixes = lane_prefixes(&pg.graph);
    let lines: Vec<Line> = prefixes
        .into_iter()
        .zip(&pg.graph.nodes)
        .skip(state.graph_scroll)
        .map(|(prefix, node)| {
            let color = author_color(node.author.as_deref());
            let short: String = node.sha.chars().take(8).collect();
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(short, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(
                    node.day.clone().unwrap_or_default(),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(" "),
                Span::styled(
                    node.author.clone().unwrap_or_else(|| "Unknown".to_string()),
                    Style::default().fg(color),
                ),
                Span::raw(" "),
                Span::raw(truncate(node.subject.as_deref().unwrap_or(""), 50)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(Block::default().title("Git graph").borders(Borders::ALL)),
        chunks[1],
    );
}

fn draw_weekdays(f: &mut Frame, area: Rect, views: &[PersonView], state: &TuiState) {
    let visible: Vec<&PersonView> = state
        .filtered_indices
        .iter()
        .filter_map(|&i| views.get(i))
        .collect();
    let totals = weekday_series(&visible);

    let block = Block::default()
        .title("Commits by weekday (by person) | 'v' git graph")
        .borders(Borders::ALL);
    if totals.iter().all(|t| t.totals.iter().all(|&v| v == 0)) {
        f.render_widget(Paragraph::new("No data loaded.").block(block), area);
        return;
    }

    let bars: Vec<Vec<Bar>> = (0..WEEKDAYS.len())
        .map(|day| {
            totals
                .iter()
                .map(|t| {
                    Bar::default()
                        .value(t.totals[day])
                        .style(Style::default().fg(person_color(&t.person.color)))
                })
                .collect()
        })
        .collect();

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);
    for (day, group) in WEEKDAYS.iter().zip(&bars) {
        chart = chart.data(BarGroup::default().label(Line::from(*day)).bars(group));
    }
    f.render_widget(chart, area);
}
