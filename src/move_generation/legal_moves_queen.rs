//! Pseudo-legal queen move generation via combined rook and bishop rays.

use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover_idx = game_state.side_to_move.index();
    let mut queens = game_state.pieces[mover_idx][PieceKind::Queen.index()];
    let own = game_state.occupancy[mover_idx];

    while queens != 0 {
        let from = queens.trailing_zeros() as Square;
        queens &= queens - 1;

        let targets = queen_attacks(from, game_state.all_occupancy) & !own;
        push_targets(game_state, out, from, PieceKind::Queen, targets);
    }
}
