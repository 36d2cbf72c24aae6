use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned article identifier.
///
/// The API contract allows either an integer or a string here, so both
/// shapes deserialize. Only ever used opaquely: compared, displayed, and
/// spliced into the download URL path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Int(n) => write!(f, "{}", n),
            ArticleId::Str(s) => f.write_str(s),
        }
    }
}

/// A single word and its relative weight within one article's cloud
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: f64,
}

/// One ingested briefing transcript as served by the backend
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Ordered by weight on the server side; may be empty
    #[serde(default)]
    pub word_frequencies: Vec<WordFrequency>,
}

impl Article {
    /// Publish date formatted for the card header, e.g. "1/5/2024"
    pub fn published_label(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }
}
