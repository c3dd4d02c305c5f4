use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )])
}

/// Draw the modal help overlay describing navigation, views, and toggles.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(70, 80, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "gitdash - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        section("Navigation:"),
        Line::from("  j/k or ↑/↓  Select person"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  PgUp/PgDn   Move by 10 (scroll graph in Activity)"),
        Line::from(""),
        section("Views:"),
        Line::from("  Tab         Next view (People/Timeline/Projects/Activity)"),
        Line::from("  Shift+Tab   Previous view"),
        Line::from(""),
        section("Toggles (each reloads the data):"),
        Line::from("  c           Cumulative / per-day timeline"),
        Line::from("  v           Git graph / weekday bars"),
        Line::from("  r           Reload the CSV"),
        Line::from("  [ / ]       Previous / next repository graph"),
        Line::from(""),
        section("Search & Filter:"),
        Line::from("  /           Filter persons by name or language"),
        Line::from("  Esc         Clear filter"),
        Line::from(""),
        Line::from("  q           Quit    h / F1  Toggle this help"),
    ];

    let paragraph = Paragraph::new(help_text).block(block);
    f.render_widget(paragraph, help_area);
}
