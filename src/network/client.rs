//! HTTP client wrapper - the boundary to the briefing-room backend

use std::io;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::header::CONTENT_DISPOSITION;
use thiserror::Error;

use crate::constants::FALLBACK_FILENAME;
use crate::models::{Article, ArticleId};

/// Failure surfaced by any backend operation
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Wire(#[from] reqwest::Error),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
}

/// Raw transcript bytes plus the filename to save them under
#[derive(Debug, Clone)]
pub struct DownloadPayload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Client for the backend REST API. Owns the base URL and the underlying
/// HTTP client; holds no other state.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ApiClient {
            http: create_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full article list, server order preserved
    pub async fn list_articles(&self) -> Result<Vec<Article>, TransportError> {
        let url = format!("{}/api/articles", self.base_url);
        let resp = check_status(self.http.get(&url).send().await?)?;
        Ok(resp.json().await?)
    }

    /// Ask the backend to re-ingest articles. Any success status counts;
    /// the body is ignored. Local state is untouched.
    pub async fn request_refresh(&self) -> Result<(), TransportError> {
        let url = format!("{}/api/refresh", self.base_url);
        check_status(self.http.post(&url).send().await?)?;
        Ok(())
    }

    /// Download one article's raw transcript.
    ///
    /// The filename comes verbatim from the Content-Disposition hint when
    /// the response carries one, otherwise the fixed fallback. Unknown ids
    /// surface as whatever status the backend returns.
    pub async fn download_transcript(
        &self,
        article_id: &ArticleId,
    ) -> Result<DownloadPayload, TransportError> {
        let url = format!("{}/api/articles/{}/download", self.base_url, article_id);
        let resp = check_status(self.http.get(&url).send().await?)?;

        let filename = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(disposition_filename)
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string());

        let mut stream = resp.bytes_stream();
        let mut bytes = Vec::new();
        while let Some(chunk) = stream.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        Ok(DownloadPayload { filename, bytes })
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(TransportError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        })
    }
}

/// Extract the filename parameter from a Content-Disposition value,
/// e.g. `attachment; filename="briefing.txt"`
fn disposition_filename(header: &str) -> Option<String> {
    let name = header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?
        .trim_matches('"')
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Write a downloaded transcript into the user's downloads directory
pub async fn save_transcript(payload: &DownloadPayload) -> io::Result<PathBuf> {
    let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    save_transcript_in(payload, &dir).await
}

/// Write a downloaded transcript under the given directory, creating it
/// if needed
pub async fn save_transcript_in(payload: &DownloadPayload, dir: &Path) -> io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&payload.filename);
    tokio::fs::write(&path, &payload.bytes).await?;
    Ok(path)
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_filename_variants() {
        assert_eq!(
            disposition_filename("attachment; filename=briefing.txt"),
            Some(String::from("briefing.txt"))
        );
        assert_eq!(
            disposition_filename("attachment; filename=\"Press_Briefing_20240105.txt\""),
            Some(String::from("Press_Briefing_20240105.txt"))
        );
        assert_eq!(
            disposition_filename("filename=transcript.txt"),
            Some(String::from("transcript.txt"))
        );
    }

    #[test]
    fn test_disposition_without_filename() {
        assert_eq!(disposition_filename("inline"), None);
        assert_eq!(disposition_filename("attachment; filename="), None);
        assert_eq!(disposition_filename("attachment; filename=\"\""), None);
    }

    #[tokio::test]
    async fn test_save_transcript_writes_payload_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let payload = DownloadPayload {
            filename: String::from("briefing.txt"),
            bytes: b"Title: Daily Briefing\n".to_vec(),
        };

        let path = save_transcript_in(&payload, dir.path()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "briefing.txt");
        assert_eq!(tokio::fs::read(&path).await.unwrap(), payload.bytes);
    }

    #[tokio::test]
    async fn test_save_transcript_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("downloads");
        let payload = DownloadPayload {
            filename: String::from("transcript.txt"),
            bytes: Vec::new(),
        };

        let path = save_transcript_in(&payload, &nested).await.unwrap();
        assert!(path.exists());
    }
}
