#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    People,
    Timeline,
    Projects,
    Activity,
}

impl ViewMode {
    pub const TITLES: [&'static str; 4] = ["People", "Timeline", "Projects", "Activity"];

    pub fn from_tab(index: usize) -> Self {
        match index {
            1 => ViewMode::Timeline,
            2 => ViewMode::Projects,
            3 => ViewMode::Activity,
            _ => ViewMode::People,
        }
    }
}

/// What the Activity tab shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightView {
    GitGraph,
    WeekdayBars,
}

pub struct TuiState {
    pub selected: usize,
    pub tab_index: usize,
    pub show_help: bool,
    pub search_query: String,
    pub search_mode: bool,
    pub filtered_indices: Vec<usize>,
    pub cumulative: bool,
    pub right_view: RightView,
    pub project_selected: usize,
    pub graph_scroll: usize,
    pub status_message: Option<(String, std::time::Instant)>,
}

impl TuiState {
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_tab(self.tab_index)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), std::time::Instant::now()));
    }

    /// Status text while it is younger than a few seconds.
    pub fn current_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < std::time::Duration::from_secs(4))
            .map(|(msg, _)| msg.as_str())
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            selected: 0,
            tab_index: 0,
            show_help: false,
            search_query: String::new(),
            search_mode: false,
            filtered_indices: Vec::new(),
            cumulative: true,
            right_view: RightView::GitGraph,
            project_selected: 0,
            graph_scroll: 0,
            status_message: None,
        }
    }
}
