//! Perft node counting over the legal move generator.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth, driving the
//! tree with make/unmake on a single scratch board. Used as a correctness
//! oracle in tests and as the workload for the perft benchmark. Counts for
//! depths that reach promotions will undercount against published tables,
//! since the generator emits queen promotions only.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};

pub fn perft(game_state: &GameState, depth: u8) -> MoveGenResult<u64> {
    let mut scratch = game_state.clone();
    perft_inner(&mut scratch, depth)
}

fn perft_inner(scratch: &mut GameState, depth: u8) -> MoveGenResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generate_legal_moves(scratch)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        make_move(scratch, mv).map_err(MoveGenerationError::InvalidState)?;
        let below = perft_inner(scratch, depth - 1);
        unmake_move(scratch);
        nodes += below?;
    }

    Ok(nodes)
}
