//! Tests for the game client against in-memory stores.

use async_trait::async_trait;
use std::sync::Arc;
use velha_core::{GameResult, GameState, MoveError, Player, Scores};
use velha_store::{GameClient, GameDocument, GameStore, MemoryStore, StoreError, Verdict};

/// Store that fails every call.
struct BrokenStore;

#[async_trait]
impl GameStore for BrokenStore {
    async fn load_state(&self) -> Result<GameDocument, StoreError> {
        Err(StoreError::new("endpoint unreachable"))
    }

    async fn save_state(&self, _doc: &GameDocument) -> Result<(), StoreError> {
        Err(StoreError::new("endpoint unreachable"))
    }
}

/// Plays X on the top row and O on the second row until X wins.
async fn play_x_top_row<S: GameStore>(client: &mut GameClient<S>) -> GameResult {
    let mut result = GameResult::Undecided;
    for index in [0, 4, 1, 5, 2, 6, 3] {
        result = client.play(index).await.expect("Legal move");
    }
    result
}

#[tokio::test]
async fn test_play_saves_document() {
    let store = Arc::new(MemoryStore::new());
    let mut client = GameClient::connect(store.clone()).await;

    let result = client.play(5).await.expect("Legal move");
    assert_eq!(result, GameResult::Undecided);

    let saved = store.load_state().await.unwrap();
    assert_eq!(saved.state(), client.state());
    assert_eq!(saved.position().map(|p| p.index()), Some(5));
    assert_eq!(saved.state().current_player(), Player::O);
    assert_eq!(saved.winner(), &None);
    assert!(client.last_error().is_none());
}

#[tokio::test]
async fn test_win_is_scored_and_stored() {
    let store = Arc::new(MemoryStore::new());
    let mut client = GameClient::connect(store.clone()).await;

    let result = play_x_top_row(&mut client).await;
    assert_eq!(result, GameResult::Winner(Player::X));

    let saved = store.load_state().await.unwrap();
    assert_eq!(saved.winner(), &Some(Verdict::X));
    assert_eq!(saved.state().scores(), Scores::new(1, 0));
    assert_eq!(saved.state().current_player(), Player::X);
}

#[tokio::test]
async fn test_moves_rejected_after_win_until_restart() {
    let store = Arc::new(MemoryStore::new());
    let mut client = GameClient::connect(store.clone()).await;
    play_x_top_row(&mut client).await;

    assert_eq!(client.play(15).await, Err(MoveError::GameOver));

    client.restart().await;
    let saved = store.load_state().await.unwrap();
    assert_eq!(saved.state().board().occupied_count(), 0);
    assert_eq!(saved.state().scores(), Scores::new(1, 0));
    assert_eq!(saved.winner(), &None);

    assert_eq!(client.play(15).await, Ok(GameResult::Undecided));
}

#[tokio::test]
async fn test_occupied_square_is_not_saved() {
    let store = Arc::new(MemoryStore::new());
    let mut client = GameClient::connect(store.clone()).await;
    client.play(0).await.unwrap();
    let before = store.load_state().await.unwrap();

    let result = client.play(0).await;
    assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
    assert_eq!(store.load_state().await.unwrap(), before);
}

#[tokio::test]
async fn test_out_of_bounds_index() {
    let mut client = GameClient::connect(MemoryStore::new()).await;
    assert_eq!(client.play(16).await, Err(MoveError::OutOfBounds(16)));
}

#[tokio::test]
async fn test_finished_game_reported_before_bad_index() {
    let store = Arc::new(MemoryStore::new());
    let mut client = GameClient::connect(store.clone()).await;
    play_x_top_row(&mut client).await;
    let before = store.load_state().await.unwrap();

    assert_eq!(client.play(16).await, Err(MoveError::GameOver));
    assert_eq!(store.load_state().await.unwrap(), before);
}

#[tokio::test]
async fn test_connect_resumes_stored_game() {
    let state = GameState::new()
        .apply_index(0, Player::X)
        .and_then(|s| s.apply_index(1, Player::O))
        .unwrap();
    let store = MemoryStore::with_document(
        GameDocument::from_state(state.clone()).with_match_id(Some("m-1".to_string())),
    );

    let mut client = GameClient::connect(Arc::new(store)).await;
    assert_eq!(client.state(), &state);

    client.play(2).await.unwrap();
    let saved = client.store().load_state().await.unwrap();
    assert_eq!(saved.match_id().as_deref(), Some("m-1"));
}

#[tokio::test]
async fn test_unreachable_store_falls_back_to_fresh_game() {
    let mut client = GameClient::connect(BrokenStore).await;
    assert_eq!(client.state(), &GameState::new());
    assert!(client.last_error().is_some());

    // The move still happens locally; the save failure is recorded.
    let result = client.play(3).await.expect("Legal move");
    assert_eq!(result, GameResult::Undecided);
    assert_eq!(client.state().board().occupied_count(), 1);
    assert!(client.last_error().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn test_refresh_picks_up_remote_changes() {
    let store = Arc::new(MemoryStore::new());
    let mut client = GameClient::connect(store.clone()).await;

    let remote = GameState::new().apply_index(9, Player::X).unwrap();
    store
        .save_state(&GameDocument::from_state(remote.clone()))
        .await
        .unwrap();

    client.refresh().await.expect("Refresh");
    assert_eq!(client.state(), &remote);
}

#[tokio::test]
async fn test_refresh_error_keeps_local_state() {
    let mut client = GameClient::connect(BrokenStore).await;
    client.play(0).await.unwrap();
    assert!(client.refresh().await.is_err());
    assert_eq!(client.state().board().occupied_count(), 1);
}
