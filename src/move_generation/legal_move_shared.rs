//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::{Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{pack_move_description, FLAG_CAPTURE};

/// The enemy piece kind on `square`, if any.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, mover: Color, square: Square) -> Option<PieceKind> {
    let mask = 1u64 << square;
    let enemy_idx = mover.opposite().index();
    if game_state.occupancy[enemy_idx] & mask == 0 {
        return None;
    }

    PieceKind::ALL
        .into_iter()
        .find(|piece| game_state.pieces[enemy_idx][piece.index()] & mask != 0)
}

/// Packs one move per set bit of `targets`, detecting captures from the
/// board. `targets` must already exclude friendly-occupied squares.
pub fn push_targets(
    game_state: &GameState,
    out: &mut Vec<Move>,
    from: Square,
    moved_piece: PieceKind,
    mut targets: u64,
) {
    let mover = game_state.side_to_move;

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        targets &= targets - 1;

        let captured = enemy_piece_on(game_state, mover, to);
        let flags = if captured.is_some() { FLAG_CAPTURE } else { 0 };
        out.push(pack_move_description(from, to, moved_piece, captured, None, flags));
    }
}
