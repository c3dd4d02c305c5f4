use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::people::PersonView;
use crate::tui::state::TuiState;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Filtered persons that fit in `height` rows, scrolled so the selection stays visible.
pub fn get_visible_people<'a>(
    views: &'a [PersonView],
    state: &TuiState,
    height: usize,
) -> Vec<(&'a PersonView, bool)> {
    let view_height = height.saturating_sub(3).max(1);
    let filtered: Vec<_> = state
        .filtered_indices
        .iter()
        .filter_map(|&i| views.get(i))
        .collect();

    if filtered.is_empty() {
        return Vec::new();
    }

    let selected_in_filtered = state
        .filtered_indices
        .iter()
        .position(|&i| i == state.selected)
        .unwrap_or(0);

    let start = selected_in_filtered
        .saturating_sub(view_height / 2)
        .min(filtered.len().saturating_sub(view_height));
    let end = (start + view_height).min(filtered.len());

    filtered[start..end]
        .iter()
        .enumerate()
        .map(|(i, &view)| {
            let global_idx = state.filtered_indices[start + i];
            (view, global_idx == state.selected)
        })
        .collect()
}
