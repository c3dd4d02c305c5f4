use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table};
use ratatui::Frame;

use super::super::{
    draw::{person_color, share_bar, share_style},
    layout::get_visible_people,
    state::TuiState,
};
use super::header_cell;
use crate::aggregate::max_cell;
use crate::heat::intensity_char;
use crate::people::{PersonOverrides, PersonView};
use crate::util::{truncate, WEEKDAYS};

/// Person list on the left, profile / heatmap / nomenclature panels on the right.
pub fn draw_people_view(
    f: &mut Frame,
    area: Rect,
    views: &[PersonView],
    overrides: &PersonOverrides,
    state: &TuiState,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let visible = get_visible_people(views, state, chunks[0].height as usize);
    let max_commits = views.iter().map(|v| v.rows.len()).max().unwrap_or(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|(view, is_selected)| {
            let color = person_color(&view.person.color);
            let name = if *is_selected {
                format!("{} ◄", truncate(&view.person.name, 18))
            } else {
                truncate(&view.person.name, 18)
            };
            let name_style = if *is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(color)
            };
            let commits = view.rows.len();
            Row::new(vec![
                Cell::from(overrides.badge(&view.person)).style(Style::default().fg(color)),
                Cell::from(name).style(name_style),
                Cell::from(format!("{:>4} {}", commits, share_bar(commits, max_commits)))
                    .style(share_style(commits, max_commits, color)),
            ])
        })
        .collect();

    let title = if state.search_mode {
        format!("People | Search: {} | Esc to cancel", state.search_query)
    } else if !state.search_query.is_empty() {
        format!(
            "People | Filtered: '{}' ({} results)",
            state.search_query,
            state.filtered_indices.len()
        )
    } else {
        "People | 'h' help, '/' search".to_string()
    };

    let table = Table::new(
        rows,
        [Constraint::Length(4), Constraint::Length(22), Constraint::Min(9)],
    )
    .header(Row::new([
        header_cell("", Color::Yellow),
        header_cell("Person", Color::Yellow),
        header_cell("Commits", Color::Green),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(table, chunks[0]);

    match views.get(state.selected) {
        Some(view) if !state.filtered_indices.is_empty() => {
            draw_person_panels(f, chunks[1], view, overrides)
        }
        _ => {
            let empty = Paragraph::new("No data loaded.")
                .block(Block::default().title("Person").borders(Borders::ALL));
            f.render_widget(empty, chunks[1]);
        }
    }
}

fn draw_person_panels(f: &mut Frame, area: Rect, view: &PersonView, overrides: &PersonOverrides) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let color = person_color(&view.person.color);
    let override_entry = overrides.get(&view.person.id);
    let display_name = override_entry
        .and_then(|o| o.label.clone())
        .unwrap_or_else(|| view.person.name.clone());

    let mut profile = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", overrides.badge(&view.person)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_name, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![Span::styled(
            format!(
                "{} commits · {} repos · top language: {}",
                view.rows.len(),
                view.unique_repos,
                view.top_language.as_deref().unwrap_or("Unknown")
            ),
            Style::default().fg(Color::Gray),
        )]),
    ];
    if let Some(avatar) = override_entry.and_then(|o| o.avatar.as_deref()) {
        profile.push(Line::from(Span::styled(
            format!("avatar: {avatar}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let languages: Vec<String> = view
        .languages
        .iter()
        .take(4)
        .map(|c| format!("{} {}", c.key, c.value))
        .collect();
    profile.push(Line::from(Span::styled(
        format!("languages: {}", languages.join(", ")),
        Style::default().fg(Color::Gray),
    )));

    f.render_widget(
        Paragraph::new(profile).block(Block::default().title(view.person.id.clone()).borders(Borders::ALL)),
        chunks[0],
    );

    let max = max_cell(&view.heatmap);
    let mut heat: Vec<Line> = view
        .heatmap
        .iter()
        .zip(WEEKDAYS)
        .map(|(row, day)| {
            let mut spans = vec![Span::styled(format!("{day:<4}"), Style::default().fg(Color::Gray))];
            spans.extend(row.iter().map(|&v| {
                let style = if v == 0 {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(color)
                };
                Span::styled(format!("{} ", intensity_char(v, max)), style)
            }));
            Line::from(spans)
        })
        .collect();
    heat.push(Line::from(Span::styled(
        "    0           6           12          18         23",
        Style::default().fg(Color::Gray),
    )));
    f.render_widget(
        Paragraph::new(heat).block(
            Block::default()
                .title("Activity heatmap (day x hour)")
                .borders(Borders::ALL),
        ),
        chunks[1],
    );

    let tally = view.nomenclature;
    let [(ok_label, ok), (ko_label, ko)] = tally.buckets();
    let gauge = Gauge::default()
        .block(Block::default().title("Naming convention").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(tally.compliant_pct().min(100) as u16)
        .label(format!("{ok_label} {ok} ({}%) · {ko_label} {ko}", tally.compliant_pct()));
    f.render_widget(gauge, chunks[2]);

    let projects: Vec<Line> = view
        .projects
        .iter()
        .take(chunks[3].height.saturating_sub(2) as usize)
        .map(|c| {
            Line::from(vec![
                Span::styled(format!("{:>5} ", c.value), Style::default().fg(Color::Green)),
                Span::raw(truncate(&c.key, 50)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(projects).block(Block::default().title("Projects").borders(Borders::ALL)),
        chunks[3],
    );
}
