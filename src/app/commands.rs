//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, StatusLine};
use crate::messages::network::RequestKind;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.articles.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Backend operations
    // ========================

    /// Begin a full fetch of the article list
    pub fn start_fetch(&mut self) -> Option<NetworkCommand> {
        self.loading = true;
        Some(NetworkCommand::FetchArticles { id: self.next_id() })
    }

    /// Begin a refresh-then-refetch cycle.
    ///
    /// Suppressed while one is already pending; the refresh control is
    /// disabled, not cancelled and restarted.
    pub fn start_refresh(&mut self) -> Option<NetworkCommand> {
        if self.refreshing {
            return None;
        }
        self.refreshing = true;
        Some(NetworkCommand::RefreshArticles { id: self.next_id() })
    }

    /// Download the transcript of the selected article.
    ///
    /// The article id is captured here, so a list overwrite while the
    /// download is in flight cannot redirect it. Only available once the
    /// feed has loaded.
    pub fn start_download(&mut self) -> Option<NetworkCommand> {
        if self.loading {
            return None;
        }
        let article_id = self.selected_article()?.id.clone();
        Some(NetworkCommand::DownloadTranscript {
            id: self.next_id(),
            article_id,
        })
    }

    /// Apply a network response, returning the follow-up command when the
    /// response chains into one (a successful refresh triggers the re-fetch).
    ///
    /// Every terminal response clears the flag of the operation it belongs
    /// to, on the success and failure paths alike.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::Articles { articles, .. } => {
                let count = articles.len();
                self.articles = articles;
                if self.selected >= count {
                    self.selected = count.saturating_sub(1);
                }
                self.loading = false;
                self.refreshing = false;
                self.status = Some(StatusLine::info(format!(
                    "{} article{}",
                    count,
                    if count == 1 { "" } else { "s" }
                )));
                None
            }
            NetworkResponse::Refreshed { .. } => {
                // Refresh accepted; re-fetch while `refreshing` stays set
                // so the control remains disabled for the whole cycle.
                self.start_fetch()
            }
            NetworkResponse::Downloaded { path, .. } => {
                self.status = Some(StatusLine::info(format!("Saved {}", path.display())));
                None
            }
            NetworkResponse::Error { id, kind, message } => {
                tracing::error!(id, op = kind.as_str(), %message, "request failed");
                match kind {
                    RequestKind::Fetch => {
                        self.loading = false;
                        self.refreshing = false;
                    }
                    RequestKind::Refresh => self.refreshing = false,
                    RequestKind::Download => {}
                }
                self.status = Some(StatusLine::error(message));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusKind;
    use crate::models::{Article, ArticleId};
    use chrono::{TimeZone, Utc};

    fn article(id: i64, title: &str) -> Article {
        Article {
            id: ArticleId::Int(id),
            title: title.into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            word_frequencies: Vec::new(),
        }
    }

    fn articles_response(state: &mut AppState, articles: Vec<Article>) -> NetworkResponse {
        NetworkResponse::Articles {
            id: state.next_id(),
            articles,
        }
    }

    fn error_response(kind: RequestKind) -> NetworkResponse {
        NetworkResponse::Error {
            id: 99,
            kind,
            message: String::from("connection refused"),
        }
    }

    #[test]
    fn test_fetch_success_replaces_list_in_order() {
        let mut state = AppState::new();
        let cmd = state.start_fetch();
        assert!(matches!(cmd, Some(NetworkCommand::FetchArticles { .. })));
        assert!(state.loading);

        let feed = vec![article(2, "b"), article(1, "a"), article(3, "c")];
        let response = articles_response(&mut state, feed.clone());
        assert!(state.handle_response(response).is_none());

        let titles: Vec<&str> = state.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["b", "a", "c"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_fetch_failure_keeps_last_known_good() {
        let mut state = AppState::new();
        state.articles = vec![article(1, "kept")];

        state.start_fetch();
        let cmd = state.handle_response(error_response(RequestKind::Fetch));

        assert!(cmd.is_none());
        assert!(!state.loading);
        assert_eq!(state.articles.len(), 1);
        assert_eq!(state.articles[0].title, "kept");
        assert_eq!(state.status.as_ref().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_refresh_chains_into_fetch() {
        let mut state = AppState::new();
        let cmd = state.start_refresh();
        assert!(matches!(cmd, Some(NetworkCommand::RefreshArticles { .. })));
        assert!(state.refreshing);

        // The fetch leg only ever starts from the Refreshed response
        let follow_up = state.handle_response(NetworkResponse::Refreshed { id: 1 });
        assert!(matches!(follow_up, Some(NetworkCommand::FetchArticles { .. })));
        assert!(state.refreshing, "flag holds for the whole cycle");
        assert!(state.loading);

        let response = articles_response(&mut state, vec![article(1, "fresh")]);
        state.handle_response(response);
        assert!(!state.refreshing);
        assert!(!state.loading);
        assert_eq!(state.articles[0].title, "fresh");
    }

    #[test]
    fn test_refresh_failure_skips_fetch() {
        let mut state = AppState::new();
        state.articles = vec![article(1, "kept")];

        state.start_refresh();
        let follow_up = state.handle_response(error_response(RequestKind::Refresh));

        assert!(follow_up.is_none(), "no speculative fetch after a failed refresh");
        assert!(!state.refreshing);
        assert_eq!(state.articles[0].title, "kept");
    }

    #[test]
    fn test_second_refresh_suppressed_while_pending() {
        let mut state = AppState::new();
        assert!(state.start_refresh().is_some());
        assert!(state.start_refresh().is_none());

        // Re-enabled after the cycle completes, success or failure
        state.handle_response(error_response(RequestKind::Refresh));
        assert!(state.start_refresh().is_some());
    }

    #[test]
    fn test_fetch_error_during_refresh_cycle_releases_both_flags() {
        let mut state = AppState::new();
        state.start_refresh();
        state.handle_response(NetworkResponse::Refreshed { id: 1 });
        state.handle_response(error_response(RequestKind::Fetch));
        assert!(!state.loading);
        assert!(!state.refreshing);
    }

    #[test]
    fn test_download_captures_selected_id() {
        let mut state = AppState::new();
        state.articles = vec![article(10, "a"), article(20, "b")];
        state.selected = 1;

        match state.start_download() {
            Some(NetworkCommand::DownloadTranscript { article_id, .. }) => {
                assert_eq!(article_id, ArticleId::Int(20));
            }
            other => panic!("expected download command, got {:?}", other),
        }
    }

    #[test]
    fn test_download_disabled_while_loading_or_empty() {
        let mut state = AppState::new();
        assert!(state.start_download().is_none(), "empty feed");

        state.articles = vec![article(1, "a")];
        state.loading = true;
        assert!(state.start_download().is_none(), "loading");
    }

    #[test]
    fn test_download_failure_leaves_feed_untouched() {
        let mut state = AppState::new();
        state.articles = vec![article(1, "a")];
        state.start_download();
        let cmd = state.handle_response(error_response(RequestKind::Download));
        assert!(cmd.is_none());
        assert_eq!(state.articles.len(), 1);
        assert!(!state.loading);
        assert!(!state.refreshing);
    }

    #[test]
    fn test_downloaded_sets_saved_status() {
        let mut state = AppState::new();
        state.handle_response(NetworkResponse::Downloaded {
            id: 1,
            path: std::path::PathBuf::from("/tmp/briefing.txt"),
        });
        let status = state.status.unwrap();
        assert_eq!(status.kind, StatusKind::Info);
        assert!(status.text.contains("briefing.txt"));
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut state = AppState::new();
        state.articles = vec![article(1, "a"), article(2, "b"), article(3, "c")];
        state.selected = 2;

        let response = articles_response(&mut state, vec![article(1, "a")]);
        state.handle_response(response);
        assert_eq!(state.selected, 0);

        let response = articles_response(&mut state, Vec::new());
        state.handle_response(response);
        assert_eq!(state.selected, 0);
        assert!(state.selected_article().is_none());
    }

    #[test]
    fn test_selection_stays_within_feed() {
        let mut state = AppState::new();
        state.select_next();
        assert_eq!(state.selected, 0);

        state.articles = vec![article(1, "a"), article(2, "b")];
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }
}
