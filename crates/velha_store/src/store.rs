//! The game-store seam and an in-memory backend.

use crate::document::GameDocument;
use crate::error::StoreError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Somewhere a game document lives between moves.
///
/// The store is responsible for durability; game rules never touch it.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Loads the current document.
    async fn load_state(&self) -> Result<GameDocument, StoreError>;

    /// Replaces the stored document.
    async fn save_state(&self, doc: &GameDocument) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: GameStore + ?Sized> GameStore for Arc<T> {
    async fn load_state(&self) -> Result<GameDocument, StoreError> {
        (**self).load_state().await
    }

    async fn save_state(&self, doc: &GameDocument) -> Result<(), StoreError> {
        (**self).save_state(doc).await
    }
}

/// Keeps a single document in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<GameDocument>,
}

impl MemoryStore {
    /// Creates a store holding a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given document.
    pub fn with_document(document: GameDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    #[instrument(skip(self))]
    async fn load_state(&self) -> Result<GameDocument, StoreError> {
        let doc = self.document.read().await.clone();
        debug!(player = %doc.state().current_player(), "Loaded document from memory");
        Ok(doc)
    }

    #[instrument(skip(self, doc))]
    async fn save_state(&self, doc: &GameDocument) -> Result<(), StoreError> {
        *self.document.write().await = doc.clone();
        debug!(position = ?doc.position(), "Saved document to memory");
        Ok(())
    }
}
