//! Board validation errors.

/// A board could not be built from the given cells.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The board does not have exactly 16 cells.
    #[display("Invalid board: expected 16 cells, got {}", _0)]
    WrongLength(usize),

    /// A cell holds something other than empty, `X` or `O`.
    #[display("Invalid board: unknown marker {:?}", _0)]
    InvalidMarker(char),
}

impl std::error::Error for BoardError {}
