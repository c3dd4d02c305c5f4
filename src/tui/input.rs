use super::TuiState;
use crate::people::PersonView;

pub fn apply_search_filter(views: &[PersonView], state: &mut TuiState) {
    if state.search_query.is_empty() {
        state.filtered_indices = (0..views.len()).collect();
    } else {
        let query = state.search_query.to_lowercase();
        state.filtered_indices = views
            .iter()
            .enumerate()
            .filter(|(_, view)| {
                view.person.name.to_lowercase().contains(&query)
                    || view
                        .top_language
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&query))
            })
            .map(|(i, _)| i)
            .collect();
    }

    ensure_selection_in_filtered(state);
}

pub fn ensure_selection_in_filtered(state: &mut TuiState) {
    if state.filtered_indices.is_empty() {
        return;
    }

    if !state.filtered_indices.contains(&state.selected) {
        state.selected = state.filtered_indices[0];
    }
}

/// Moves the selection by `delta` positions inside the filtered list.
pub fn move_selection(state: &mut TuiState, delta: isize) {
    if state.filtered_indices.is_empty() {
        return;
    }
    let pos = state
        .filtered_indices
        .iter()
        .position(|&i| i == state.selected)
        .unwrap_or(0) as isize;
    let last = state.filtered_indices.len() as isize - 1;
    let next = (pos + delta).clamp(0, last) as usize;
    state.selected = state.filtered_indices[next];
}
