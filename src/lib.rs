//! # Presser TUI
//!
//! A terminal client for a briefing-room article service.
//!
//! ## Features
//! - Article feed with a word cloud per briefing
//! - Backend refresh (re-ingest) from the keyboard
//! - Transcript download, filename taken from the response
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod cloud;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use cloud::cloud_lines;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Article, ArticleId, WordFrequency};
pub use network::{ApiClient, NetworkActor, TransportError};
