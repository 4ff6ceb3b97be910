//! Game state and its immutable transitions.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::result::GameResult;
use crate::rules::evaluate;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Win counters per player. Draws are not counted.
///
/// Serialized as `{"X": 0, "O": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "X", default)]
    x: u32,
    #[serde(rename = "O", default)]
    o: u32,
}

impl Scores {
    /// Creates scores from explicit counts.
    pub fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Wins recorded for a player.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Returns the scores with one more win for `player`.
    pub fn with_win(self, player: Player) -> Self {
        match player {
            Player::X => Self {
                x: self.x.saturating_add(1),
                ..self
            },
            Player::O => Self {
                o: self.o.saturating_add(1),
                ..self
            },
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {} | O: {}", self.x, self.o)
    }
}

/// Complete game state: board, player to move and running scores.
///
/// Serialized with the field names `board`, `currentPlayer` and `scores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    board: Board,
    current_player: Player,
    #[serde(default)]
    scores: Scores,
}

impl GameState {
    /// Creates a new game: empty board, X to move, no wins.
    pub fn new() -> Self {
        Self::with_scores(Scores::default())
    }

    /// Creates a new game carrying over existing scores.
    pub fn with_scores(scores: Scores) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            scores,
        }
    }

    /// Rebuilds a state from its parts.
    pub fn from_parts(board: Board, current_player: Player, scores: Scores) -> Self {
        Self {
            board,
            current_player,
            scores,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Evaluates the board.
    pub fn result(&self) -> GameResult {
        evaluate(&self.board)
    }

    /// Places `player`'s mark at `position`, returning the next state.
    ///
    /// `self` is left untouched. A win adds one to the winner's score. Once
    /// the game ends (win or draw) the turn goes back to X; otherwise it
    /// passes to the opponent.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::GameOver`], [`MoveError::WrongPlayer`],
    /// [`MoveError::SquareOccupied`].
    #[instrument(skip(self, position, player), fields(position = position.index(), player = %player))]
    pub fn apply_move(&self, position: Position, player: Player) -> Result<GameState, MoveError> {
        if self.result().is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::WrongPlayer(player));
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let board = self.board.with(position, Square::Occupied(player));
        let result = evaluate(&board);

        let scores = match result.winner() {
            Some(winner) => self.scores.with_win(winner),
            None => self.scores,
        };

        let current_player = if result.is_over() {
            info!(result = %result, "Game finished");
            Player::X
        } else {
            player.opponent()
        };

        debug!(next = %current_player, "Move applied");
        Ok(GameState {
            board,
            current_player,
            scores,
        })
    }

    /// Like [`apply_move`](Self::apply_move) for a raw board index.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::GameOver`], [`MoveError::OutOfBounds`],
    /// then the rest of what `apply_move` rejects.
    #[instrument(skip(self))]
    pub fn apply_index(&self, index: usize, player: Player) -> Result<GameState, MoveError> {
        if self.result().is_over() {
            return Err(MoveError::GameOver);
        }
        let position = Position::try_from(index)?;
        self.apply_move(position, player)
    }

    /// Applies a [`Move`].
    pub fn play(&self, action: Move) -> Result<GameState, MoveError> {
        self.apply_move(action.position, action.player)
    }

    /// Empties the board and gives the turn to X, keeping the scores.
    #[instrument(skip(self))]
    pub fn restart(&self) -> GameState {
        info!(scores = %self.scores, "Restarting game");
        GameState::with_scores(self.scores)
    }

    /// Replays moves from a fresh state.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, action| state.play(*action))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
