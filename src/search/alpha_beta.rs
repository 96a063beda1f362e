//! Depth-limited minimax with alpha-beta pruning and a transposition table.
//!
//! The walk mutates a single scratch board with make/unmake rather than
//! copying positions. `maximizing` tracks whose turn it is in White-score
//! terms: White maximizes, Black minimizes. Leaves are reached at depth
//! zero or when the side to move has no legal reply (checkmate or
//! stalemate); both are scored statically and cached.

use std::error::Error;
use std::fmt;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::MoveGenerationError;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;
use crate::search::transposition_table::TranspositionTable;
use crate::search::zobrist::compute_zobrist_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    MoveGeneration(MoveGenerationError),
    MoveApplication(String),
    WorkerFailed(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MoveGeneration(err) => write!(f, "move generation failed: {err}"),
            SearchError::MoveApplication(details) => {
                write!(f, "move application failed: {details}")
            }
            SearchError::WorkerFailed(details) => write!(f, "search worker failed: {details}"),
        }
    }
}

impl Error for SearchError {}

impl From<MoveGenerationError> for SearchError {
    fn from(err: MoveGenerationError) -> Self {
        SearchError::MoveGeneration(err)
    }
}

/// Searches `depth` plies below `game_state` and returns the position's
/// White-perspective value. The scratch board is restored before both
/// `Ok` and `Err` returns.
pub fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    scorer: &S,
    table: &mut TranspositionTable,
) -> Result<i32, SearchError> {
    let key = compute_zobrist_key(game_state);
    if let Some(score) = table.probe(key, depth) {
        return Ok(score);
    }

    if depth == 0 {
        let score = scorer.score(game_state);
        table.store(key, depth, score);
        return Ok(score);
    }

    let moves = generate_legal_moves(game_state)?;
    if moves.is_empty() {
        let score = scorer.score(game_state);
        table.store(key, depth, score);
        return Ok(score);
    }

    let ordered = order_moves(&moves);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for (mv, _ordering_score) in ordered {
        make_move(game_state, mv).map_err(SearchError::MoveApplication)?;
        let outcome = minimax(game_state, depth - 1, alpha, beta, !maximizing, scorer, table);
        unmake_move(game_state);
        let value = outcome?;

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }

        if beta <= alpha {
            break;
        }
    }

    table.store(key, depth, best);
    Ok(best)
}
