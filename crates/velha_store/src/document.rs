//! The JSON document exchanged with a game store.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use velha_core::{GameResult, GameState, Player, Position};

/// Winner field of a stored document: a player, or `"Empate"` for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player X won.
    X,
    /// Player O won.
    O,
    /// The board filled up with no line.
    #[serde(rename = "Empate")]
    Draw,
}

impl Verdict {
    /// Verdict for a finished game, `None` while it is undecided.
    pub fn from_result(result: GameResult) -> Option<Self> {
        match result {
            GameResult::Undecided => None,
            GameResult::Winner(Player::X) => Some(Verdict::X),
            GameResult::Winner(Player::O) => Some(Verdict::O),
            GameResult::Draw => Some(Verdict::Draw),
        }
    }
}

/// Game state as stored remotely.
///
/// The state's fields sit at the top level next to the optional move
/// metadata:
///
/// ```json
/// {"board": [null, "X", ...], "currentPlayer": "O", "scores": {"X": 0, "O": 0},
///  "matchId": "m1", "position": 1, "vencedor": "X"}
/// ```
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GameDocument {
    /// Board, player to move and scores.
    #[serde(flatten)]
    state: GameState,

    /// Match identifier, when the store tracks several matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    match_id: Option<String>,

    /// Position of the move that produced this state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Position>,

    /// Winner once the game has ended.
    #[serde(rename = "vencedor", default, skip_serializing_if = "Option::is_none")]
    winner: Option<Verdict>,
}

impl GameDocument {
    /// Wraps a state with no move metadata.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            match_id: None,
            position: None,
            winner: None,
        }
    }

    /// Document describing the state right after a move at `position`.
    ///
    /// The winner field is filled from the board.
    pub fn after_move(state: GameState, position: Position) -> Self {
        let winner = Verdict::from_result(state.result());
        Self {
            state,
            match_id: None,
            position: Some(position),
            winner,
        }
    }

    /// Sets the match identifier.
    pub fn with_match_id(mut self, match_id: Option<String>) -> Self {
        self.match_id = match_id;
        self
    }

    /// Consumes the document, returning the game state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl Default for GameDocument {
    fn default() -> Self {
        Self::from_state(GameState::new())
    }
}
