//! Game client: applies moves locally and keeps the store in sync.

use crate::document::GameDocument;
use crate::error::StoreError;
use crate::store::GameStore;
use tracing::{debug, info, instrument, warn};
use velha_core::{GameResult, GameState, MoveError, Position};

/// Plays one game against a [`GameStore`].
///
/// Local state is authoritative between calls. A failed save is logged
/// and kept in [`last_error`](Self::last_error) rather than undoing the move.
#[derive(Debug)]
pub struct GameClient<S> {
    store: S,
    state: GameState,
    match_id: Option<String>,
    last_error: Option<String>,
}

impl<S: GameStore> GameClient<S> {
    /// Loads the stored game, falling back to a fresh one if the store
    /// cannot be read.
    #[instrument(skip(store))]
    pub async fn connect(store: S) -> Self {
        let (state, match_id, last_error) = match store.load_state().await {
            Ok(doc) => {
                info!(player = %doc.state().current_player(), "Loaded stored game");
                let match_id = doc.match_id().clone();
                (doc.into_state(), match_id, None)
            }
            Err(e) => {
                warn!(error = %e, "Could not load game state, starting fresh");
                (GameState::new(), None, Some(e.to_string()))
            }
        };
        Self {
            store,
            state,
            match_id,
            last_error,
        }
    }

    /// Uses `match_id` for every document saved from now on.
    pub fn with_match_id(mut self, match_id: Option<String>) -> Self {
        if match_id.is_some() {
            self.match_id = match_id;
        }
        self
    }

    /// Current local state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Evaluation of the current board.
    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    /// The last store error, cleared by the next successful save.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plays the current player's mark at `index` and saves the new state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the move is illegal; nothing is saved then.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub async fn play(&mut self, index: usize) -> Result<GameResult, MoveError> {
        let next = self
            .state
            .apply_index(index, self.state.current_player())?;
        let position = Position::try_from(index)?;
        let result = next.result();
        info!(result = %result, "Move played");

        self.state = next;
        let doc = GameDocument::after_move(self.state.clone(), position)
            .with_match_id(self.match_id.clone());
        self.save(&doc).await;
        Ok(result)
    }

    /// Empties the board, keeping scores, and saves.
    #[instrument(skip(self))]
    pub async fn restart(&mut self) {
        self.state = self.state.restart();
        let doc = GameDocument::from_state(self.state.clone()).with_match_id(self.match_id.clone());
        self.save(&doc).await;
    }

    /// Replaces local state with whatever the store holds now.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read; local state is
    /// kept in that case.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let doc = self.store.load_state().await?;
        debug!(player = %doc.state().current_player(), "Refreshed from store");
        if doc.match_id().is_some() {
            self.match_id = doc.match_id().clone();
        }
        self.state = doc.into_state();
        Ok(())
    }

    async fn save(&mut self, doc: &GameDocument) {
        match self.store.save_state(doc).await {
            Ok(()) => self.last_error = None,
            Err(e) => {
                warn!(error = %e, "Could not save game state");
                self.last_error = Some(e.to_string());
            }
        }
    }
}
