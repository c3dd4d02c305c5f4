use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::input::{apply_search_filter, move_selection};
use super::state::{RightView, TuiState, ViewMode};
use crate::people::PersonView;

/// What the run loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Re-read the CSV and recompute every view.
    Reload,
}

/// Handle a keyboard event, mutating TUI state and telling the loop what to do next.
pub fn handle_key_event(
    key_event: KeyEvent,
    state: &mut TuiState,
    views: &[PersonView],
    project_count: usize,
) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::None;
    }

    if state.search_mode {
        handle_search_input(key_event.code, state, views);
        return Action::None;
    }

    match key_event.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = !state.show_help,
        KeyCode::Char('/') => {
            state.search_mode = true;
            state.search_query.clear();
        }
        KeyCode::Esc => {
            state.show_help = false;
            state.search_query.clear();
            apply_search_filter(views, state);
        }
        KeyCode::Tab => {
            state.tab_index = (state.tab_index + 1) % ViewMode::TITLES.len();
        }
        KeyCode::BackTab => {
            state.tab_index = if state.tab_index == 0 {
                ViewMode::TITLES.len() - 1
            } else {
                state.tab_index - 1
            };
        }
        KeyCode::Char('c') => {
            state.cumulative = !state.cumulative;
            state.set_status(format!(
                "Cumulative: {}",
                if state.cumulative { "On" } else { "Off" }
            ));
            return Action::Reload;
        }
        KeyCode::Char('v') => {
            state.right_view = match state.right_view {
                RightView::GitGraph => RightView::WeekdayBars,
                RightView::WeekdayBars => RightView::GitGraph,
            };
            state.graph_scroll = 0;
            return Action::Reload;
        }
        KeyCode::Char('r') => return Action::Reload,
        KeyCode::Char(']') if project_count > 0 => {
            state.project_selected = (state.project_selected + 1) % project_count;
            state.graph_scroll = 0;
        }
        KeyCode::Char('[') if project_count > 0 => {
            state.project_selected = (state.project_selected + project_count - 1) % project_count;
            state.graph_scroll = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => move_selection(state, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(state, 1),
        KeyCode::Home => move_selection(state, isize::MIN / 2),
        KeyCode::End => move_selection(state, isize::MAX / 2),
        KeyCode::PageUp => {
            if state.view_mode() == ViewMode::Activity {
                state.graph_scroll = state.graph_scroll.saturating_sub(10);
            } else {
                move_selection(state, -10);
            }
        }
        KeyCode::PageDown => {
            if state.view_mode() == ViewMode::Activity {
                state.graph_scroll += 10;
            } else {
                move_selection(state, 10);
            }
        }
        _ => {}
    }
    Action::None
}

fn handle_search_input(code: KeyCode, state: &mut TuiState, views: &[PersonView]) {
    match code {
        KeyCode::Esc => {
            state.search_mode = false;
            state.search_query.clear();
            apply_search_filter(views, state);
        }
        KeyCode::Enter => {
            state.search_mode = false;
            apply_search_filter(views, state);
        }
        KeyCode::Backspace => {
            state.search_query.pop();
            apply_search_filter(views, state);
        }
        KeyCode::Char(c) => {
            state.search_query.push(c);
            apply_search_filter(views, state);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn toggles_request_a_reload() {
        let mut state = TuiState::default();
        assert!(state.cumulative);
        assert_eq!(handle_key_event(press(KeyCode::Char('c')), &mut state, &[], 0), Action::Reload);
        assert!(!state.cumulative);
        assert_eq!(handle_key_event(press(KeyCode::Char('v')), &mut state, &[], 0), Action::Reload);
        assert_eq!(state.right_view, RightView::WeekdayBars);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut state, &[], 0), Action::Quit);
    }

    #[test]
    fn tabs_wrap_around() {
        let mut state = TuiState::default();
        handle_key_event(press(KeyCode::BackTab), &mut state, &[], 0);
        assert_eq!(state.view_mode(), ViewMode::Activity);
        handle_key_event(press(KeyCode::Tab), &mut state, &[], 0);
        assert_eq!(state.view_mode(), ViewMode::People);
    }

    #[test]
    fn project_cycling_wraps() {
        let mut state = TuiState::default();
        handle_key_event(press(KeyCode::Char('[')), &mut state, &[], 3);
        assert_eq!(state.project_selected, 2);
        handle_key_event(press(KeyCode::Char(']')), &mut state, &[], 3);
        assert_eq!(state.project_selected, 0);
    }

    #[test]
    fn search_mode_captures_characters() {
        let mut state = TuiState::default();
        handle_key_event(press(KeyCode::Char('/')), &mut state, &[], 0);
        assert!(state.search_mode);
        handle_key_event(press(KeyCode::Char('q')), &mut state, &[], 0);
        assert_eq!(state.search_query, "q");
        handle_key_event(press(KeyCode::Enter), &mut state, &[], 0);
        assert!(!state.search_mode);
    }
}
