//! The engine interface used by drivers and match harnesses.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

/// Per-request search parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Search depth in plies. `None` lets the engine use its default.
    pub depth: Option<u8>,
}

/// What an engine hands back for one position.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// The chosen move, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Mover-perspective score of the chosen move, when the engine has one.
    pub score: Option<i32>,
    /// Free-form diagnostic lines for the driver to print.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for the side to move in `game_state`.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
