use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Cell;

mod activity;
mod help;
mod people;
mod projects;
mod timeline;

pub use activity::draw_activity_view;
pub use help::draw_help_overlay;
pub use people::draw_people_view;
pub use projects::draw_projects_view;
pub use timeline::draw_timeline_view;

pub(crate) use crate::util::truncate;

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}
