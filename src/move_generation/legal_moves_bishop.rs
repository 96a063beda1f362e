//! Pseudo-legal bishop move generation via ray casting.

use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover_idx = game_state.side_to_move.index();
    let mut bishops = game_state.pieces[mover_idx][PieceKind::Bishop.index()];
    let own = game_state.occupancy[mover_idx];

    while bishops != 0 {
        let from = bishops.trailing_zeros() as Square;
        bishops &= bishops - 1;

        let targets = bishop_attacks(from, game_state.all_occupancy) & !own;
        push_targets(game_state, out, from, PieceKind::Bishop, targets);
    }
}
