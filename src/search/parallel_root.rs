//! Parallel root search.
//!
//! Every root move gets its own thread with a deep copy of the position and
//! a private transposition table, so tasks share nothing and need no locks.
//! Workers return explicit results; a worker that fails or panics costs its
//! move a guaranteed-loss score instead of poisoning the whole search. Only
//! when every worker fails does the search itself return an error.
//!
//! Worker scores are White-perspective values from the subtree below the
//! root move. At the join they are converted to the mover's perspective
//! (negated when Black is choosing), and the best mover-perspective score
//! wins, first in root order on ties. That keeps move selection correct for
//! both colors.

use std::thread;

use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::NULL_MOVE;
use crate::search::alpha_beta::{minimax, SearchError};
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;
use crate::search::transposition_table::TranspositionTable;

/// Score assigned to a root move whose worker failed. Any real evaluation
/// beats it, so broken tasks lose tie-breaks but never win the search.
pub const FAILED_TASK_SCORE: i32 = i32::MIN + 1;

#[derive(Debug, Clone)]
pub struct RootMoveReport {
    pub mv: Move,
    /// White-perspective subtree value, or the worker's error.
    pub outcome: Result<i32, SearchError>,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The chosen move, or the null sentinel when the mover has no legal
    /// moves. Callers must test with `is_null_move` before applying.
    pub best_move: Move,
    /// Mover-perspective score of the chosen move.
    pub score: i32,
    /// Per-root-move results in the order the moves were searched.
    pub reports: Vec<RootMoveReport>,
}

/// Searches `depth` plies from `game_state` with one worker thread per root
/// move and returns the best move for the side to move.
pub fn find_best_move<S>(
    game_state: &GameState,
    depth: u8,
    scorer: &S,
) -> Result<SearchOutcome, SearchError>
where
    S: BoardScorer + Clone + 'static,
{
    let moves = generate_legal_moves(game_state)?;
    if moves.is_empty() {
        return Ok(SearchOutcome {
            best_move: NULL_MOVE,
            score: 0,
            reports: Vec::new(),
        });
    }

    let mover = game_state.side_to_move;
    // After the root move the opponent is on turn; White maximizes in
    // White-perspective terms.
    let child_maximizing = mover == Color::Black;
    let ordered = order_moves(&moves);

    let mut handles = Vec::with_capacity(ordered.len());
    for (mv, _ordering_score) in &ordered {
        let mv = *mv;
        let mut scratch = game_state.clone();
        let task_scorer = scorer.clone();

        handles.push(thread::spawn(move || -> Result<i32, SearchError> {
            let mut table = TranspositionTable::new();
            make_move(&mut scratch, mv).map_err(SearchError::MoveApplication)?;
            minimax(
                &mut scratch,
                depth.saturating_sub(1),
                i32::MIN,
                i32::MAX,
                child_maximizing,
                &task_scorer,
                &mut table,
            )
        }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(match handle.join() {
            Ok(result) => result,
            Err(_) => Err(SearchError::WorkerFailed(
                "root search thread panicked".to_owned(),
            )),
        });
    }

    select_root_move(mover, &ordered, outcomes)
}

/// Joins the per-root-move outcomes into a final choice. With every worker
/// failed there is no evaluation to stand on, so the whole search errors
/// rather than surfacing a sentinel score as if it were real.
fn select_root_move(
    mover: Color,
    ordered: &[(Move, i32)],
    outcomes: Vec<Result<i32, SearchError>>,
) -> Result<SearchOutcome, SearchError> {
    if outcomes.iter().all(|outcome| outcome.is_err()) {
        return Err(SearchError::WorkerFailed(
            "every root search worker failed".to_owned(),
        ));
    }

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut best_index = 0usize;
    let mut best_score = i32::MIN;

    for (index, outcome) in outcomes.into_iter().enumerate() {
        let mover_score = match &outcome {
            Ok(white_score) => match mover {
                Color::White => *white_score,
                Color::Black => -*white_score,
            },
            Err(_) => FAILED_TASK_SCORE,
        };

        // Strict comparison: the earliest root move wins ties.
        if mover_score > best_score {
            best_score = mover_score;
            best_index = index;
        }

        reports.push(RootMoveReport {
            mv: ordered[index].0,
            outcome,
        });
    }

    Ok(SearchOutcome {
        best_move: ordered[best_index].0,
        score: best_score,
        reports,
    })
}
