//! Pseudo-legal rook move generation via ray casting.

use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover_idx = game_state.side_to_move.index();
    let mut rooks = game_state.pieces[mover_idx][PieceKind::Rook.index()];
    let own = game_state.occupancy[mover_idx];

    while rooks != 0 {
        let from = rooks.trailing_zeros() as Square;
        rooks &= rooks - 1;

        let targets = rook_attacks(from, game_state.all_occupancy) & !own;
        push_targets(game_state, out, from, PieceKind::Rook, targets);
    }
}
