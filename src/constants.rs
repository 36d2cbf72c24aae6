//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the briefing-room backend
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Filename used when a download response carries no filename hint
pub const FALLBACK_FILENAME: &str = "transcript.txt";

/// Title bar text
pub const APP_TITLE: &str = "White House Briefing Room";

/// Log file written to the working directory
pub const LOG_FILE: &str = "presser.log";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
