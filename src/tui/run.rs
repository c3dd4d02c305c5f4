use std::io;

use crossterm::event::{poll, read, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Terminal;

use super::events::{handle_key_event, Action};
use super::input::apply_search_filter;
use super::state::{TuiState, ViewMode};
use super::views::{
    draw_activity_view, draw_help_overlay, draw_people_view, draw_projects_view,
    draw_timeline_view,
};
use crate::cli::CommonArgs;
use crate::dataset::Dataset;
use crate::graph::{project_graphs, ProjectGraph};

/// Everything the frame draws from; rebuilt from scratch on each reload.
struct Loaded {
    dataset: Dataset,
    graphs: Vec<ProjectGraph>,
}

fn load(common: &CommonArgs, state: &mut TuiState) -> io::Result<Loaded> {
    let dataset = Dataset::open_or_empty(common, false).map_err(|e| io::Error::other(e.to_string()))?;
    let graphs = project_graphs(&dataset.rows, None);

    state.project_selected = state.project_selected.min(graphs.len().saturating_sub(1));
    apply_search_filter(&dataset.views, state);

    Ok(Loaded { dataset, graphs })
}

/// Starting state; the global `--person` filter becomes the initial search.
fn initial_state(common: &CommonArgs) -> TuiState {
    TuiState {
        search_query: common.person.clone().unwrap_or_default(),
        ..TuiState::default()
    }
}

pub fn run(common: &CommonArgs) -> io::Result<()> {
    let mut state = initial_state(common);
    let mut loaded = load(common, &mut state)?;

    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, common, &mut state, &mut loaded);

    terminal.clear()?;
    disable_raw_mode()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    common: &CommonArgs,
    state: &mut TuiState,
    loaded: &mut Loaded,
) -> io::Result<()> {
    loop {
        let draw_result = terminal.draw(|f| {
            let size = f.size();

            if state.show_help {
                draw_help_overlay(f, size);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(size);

            let tabs = Tabs::new(ViewMode::TITLES.to_vec())
                .block(Block::default().borders(Borders::ALL).title("gitdash"))
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .select(state.tab_index);
            f.render_widget(tabs, chunks[0]);

            let views = &loaded.dataset.views;
            match state.view_mode() {
                ViewMode::People => {
                    draw_people_view(f, chunks[1], views, &loaded.dataset.overrides, state)
                }
                ViewMode::Timeline => draw_timeline_view(f, chunks[1], views, state),
                ViewMode::Projects => draw_projects_view(f, chunks[1], views, state),
                ViewMode::Activity => {
                    draw_activity_view(f, chunks[1], views, &loaded.graphs, state)
                }
            }

            let status = state
                .current_status()
                .map(str::to_string)
                .unwrap_or_else(|| loaded.dataset.status.clone());
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(status, Style::default().fg(Color::Gray)))),
                chunks[2],
            );
        });

        if let Err(e) = draw_result {
            tracing::error!(error = %e, "TUI draw error");
        }

        if poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key_event) = read()? {
                let action = handle_key_event(
                    key_event,
                    state,
                    &loaded.dataset.views,
                    loaded.graphs.len(),
                );
                match action {
                    Action::Quit => break,
                    Action::Reload => *loaded = load(common, state)?,
                    Action::None => {}
                }
            }
        }
    }
    Ok(())
}
