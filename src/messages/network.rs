//! Network messages - communication between App and Network layers

use std::path::PathBuf;

use crate::models::{Article, ArticleId};

/// Which backend operation a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fetch,
    Refresh,
    Download,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Fetch => "fetch",
            RequestKind::Refresh => "refresh",
            RequestKind::Download => "download",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full article list
    FetchArticles { id: u64 },
    /// Ask the backend to re-ingest and recompute articles
    RefreshArticles { id: u64 },
    /// Download one article's transcript and save it locally
    DownloadTranscript { id: u64, article_id: ArticleId },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Article list fetched successfully, server order preserved
    Articles { id: u64, articles: Vec<Article> },
    /// Backend accepted the refresh request
    Refreshed { id: u64 },
    /// Transcript saved to disk
    Downloaded { id: u64, path: PathBuf },
    /// Operation failed; the list keeps its last-known-good value
    Error {
        id: u64,
        kind: RequestKind,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Articles { id, .. } => *id,
            NetworkResponse::Refreshed { id } => *id,
            NetworkResponse::Downloaded { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
