//! Pseudo-legal knight move generation from the precomputed attack table.

use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover_idx = game_state.side_to_move.index();
    let mut knights = game_state.pieces[mover_idx][PieceKind::Knight.index()];
    let own = game_state.occupancy[mover_idx];

    while knights != 0 {
        let from = knights.trailing_zeros() as Square;
        knights &= knights - 1;

        let targets = knight_attacks(from) & !own;
        push_targets(game_state, out, from, PieceKind::Knight, targets);
    }
}
