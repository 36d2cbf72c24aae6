//! Network actor - executes backend requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::network::RequestKind;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{save_transcript, ApiClient};

/// Network actor that processes backend commands
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchArticles { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "fetching article list");
                                let response = match client.list_articles().await {
                                    Ok(articles) => {
                                        tracing::info!(id, count = articles.len(), "article list fetched");
                                        NetworkResponse::Articles { id, articles }
                                    }
                                    Err(e) => NetworkResponse::Error {
                                        id,
                                        kind: RequestKind::Fetch,
                                        message: e.to_string(),
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::RefreshArticles { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "requesting backend refresh");
                                let response = match client.request_refresh().await {
                                    Ok(()) => NetworkResponse::Refreshed { id },
                                    Err(e) => NetworkResponse::Error {
                                        id,
                                        kind: RequestKind::Refresh,
                                        message: e.to_string(),
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::DownloadTranscript { id, article_id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, article = %article_id, "downloading transcript");
                                let response = match client.download_transcript(&article_id).await {
                                    Ok(payload) => match save_transcript(&payload).await {
                                        Ok(path) => {
                                            tracing::info!(id, path = %path.display(), "transcript saved");
                                            NetworkResponse::Downloaded { id, path }
                                        }
                                        Err(e) => NetworkResponse::Error {
                                            id,
                                            kind: RequestKind::Download,
                                            message: format!("saving {}: {}", payload.filename, e),
                                        },
                                    },
                                    Err(e) => NetworkResponse::Error {
                                        id,
                                        kind: RequestKind::Download,
                                        message: e.to_string(),
                                    },
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - nothing further to do
                }
            }
        }
    }
}
