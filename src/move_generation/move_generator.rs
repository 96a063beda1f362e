//! Move generator interface and its error type.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// The position cannot be processed, e.g. a move description that does
    /// not match the board it is applied to.
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(details) => {
                write!(f, "invalid game state: {details}")
            }
        }
    }
}

impl Error for MoveGenerationError {}

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

pub trait MoveGenerator {
    /// Produces every legal move for the side to move. An empty list means
    /// checkmate or stalemate depending on whether the king is in check.
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<Move>>;
}
