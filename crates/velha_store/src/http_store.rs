//! Game store behind an HTTP endpoint.

use crate::config::ClientConfig;
use crate::document::GameDocument;
use crate::error::StoreError;
use crate::store::GameStore;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Talks to a remote endpoint that returns the document on `GET` and
/// accepts it on `POST`.
#[derive(Debug, Clone)]
pub struct HttpGameStore {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpGameStore {
    /// Creates a store for `endpoint` with a default HTTP client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a store from client configuration, applying its timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(endpoint = %config.endpoint()))]
    pub fn from_config(config: &ClientConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        info!("HTTP store configured");
        Ok(Self {
            endpoint: config.endpoint().clone(),
            client,
        })
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GameStore for HttpGameStore {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn load_state(&self) -> Result<GameDocument, StoreError> {
        debug!("Fetching game state");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::new(format!(
                "Failed to fetch game state: HTTP {}",
                status
            )));
        }

        let doc: GameDocument = response.json().await?;
        debug!(player = %doc.state().current_player(), "Got game state");
        Ok(doc)
    }

    #[instrument(skip(self, doc), fields(endpoint = %self.endpoint))]
    async fn save_state(&self, doc: &GameDocument) -> Result<(), StoreError> {
        debug!(position = ?doc.position(), "Posting game state");

        let response = self
            .client
            .post(&self.endpoint)
            .json(doc)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::new(format!(
                "Failed to update game state: HTTP {} - {}",
                status, body
            )));
        }

        Ok(())
    }
}
