//! App state - pure data structure with no I/O logic

use crate::messages::RenderState;
use crate::models::Article;

/// Severity of a status bar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient message shown in the status bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        StatusLine {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusLine {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Feed data, replaced wholesale on each successful fetch
    pub articles: Vec<Article>,
    pub loading: bool,
    pub refreshing: bool,

    // Feed navigation
    pub selected: usize,

    // Status bar
    pub status: Option<StatusLine>,

    // Popups
    pub show_help: bool,

    // Request id source, used for log correlation
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            articles: Vec::new(),
            loading: false,
            refreshing: false,
            selected: 0,
            status: None,
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Article currently under the cursor
    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            articles: self.articles.clone(),
            loading: self.loading,
            refreshing: self.refreshing,
            selected: self.selected,
            status: self.status.clone(),
            show_help: self.show_help,
        }
    }
}
