//! Attack and check queries.
//!
//! `is_square_attacked` asks the question in reverse: it projects each piece
//! kind's attack pattern outward from the queried square and intersects it
//! with the attacker's pieces of that kind. Sliders use the live occupancy,
//! so blockers are respected. Castling never marks a square attacked.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Location of `color`'s king, or `None` on a malformed board without one.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let king_mask = game_state.pieces[color.index()][PieceKind::King.index()];
    if king_mask == 0 {
        return None;
    }
    Some(king_mask.trailing_zeros() as Square)
}

/// True when any piece of `by_color` attacks `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, by_color: Color) -> bool {
    let attacker = &game_state.pieces[by_color.index()];
    let occupancy = game_state.all_occupancy;

    // A pawn of the attacked side standing on `square` would capture exactly
    // onto the attacker pawns that threaten it.
    if pawn_attacks(by_color.opposite(), square) & attacker[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & attacker[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attacker[PieceKind::King.index()] != 0 {
        return true;
    }

    let diagonal_sliders =
        attacker[PieceKind::Bishop.index()] | attacker[PieceKind::Queen.index()];
    if bishop_attacks(square, occupancy) & diagonal_sliders != 0 {
        return true;
    }

    let straight_sliders = attacker[PieceKind::Rook.index()] | attacker[PieceKind::Queen.index()];
    rook_attacks(square, occupancy) & straight_sliders != 0
}

/// True when `color`'s king is attacked. A board without that king is never
/// "in check".
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    match king_square(game_state, color) {
        Some(square) => is_square_attacked(game_state, square, color.opposite()),
        None => false,
    }
}
