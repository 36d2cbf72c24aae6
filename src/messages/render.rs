//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::StatusLine;
use crate::models::Article;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Feed in server order
    pub articles: Vec<Article>,
    /// True only while a full fetch is in flight
    pub loading: bool,
    /// True for the entire refresh-then-refetch cycle
    pub refreshing: bool,

    // Feed navigation
    pub selected: usize,

    // Status bar
    pub status: Option<StatusLine>,

    // Popups
    pub show_help: bool,
}
