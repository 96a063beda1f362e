//! Packed move descriptions.
//!
//! A move is a single `u64` with the following layout (low bits first):
//!
//! | bits    | field                  |
//! |---------|------------------------|
//! | 0..6    | from square            |
//! | 6..12   | to square              |
//! | 12..15  | moved piece code       |
//! | 15..18  | captured piece code    |
//! | 18..21  | promotion piece code   |
//! | 21      | capture flag           |
//! | 22      | double pawn push flag  |
//! | 23      | en passant flag        |
//! | 24      | castling flag          |
//!
//! Piece codes are `PieceKind::index()`; `NO_PIECE_CODE` (all ones) marks an
//! absent captured or promotion piece. The null move sentinel has its origin
//! equal to its destination and stands for "no move available".

use crate::game_state::chess_types::{Move, PieceKind, Square};

pub const NO_PIECE_CODE: u64 = 0x7;

const FROM_SHIFT: u64 = 0;
const TO_SHIFT: u64 = 6;
const MOVED_PIECE_SHIFT: u64 = 12;
const CAPTURED_PIECE_SHIFT: u64 = 15;
const PROMOTION_PIECE_SHIFT: u64 = 18;

const SQUARE_MASK: u64 = 0x3F;
const PIECE_MASK: u64 = 0x7;

pub const FLAG_CAPTURE: u64 = 1 << 21;
pub const FLAG_DOUBLE_PAWN_PUSH: u64 = 1 << 22;
pub const FLAG_EN_PASSANT: u64 = 1 << 23;
pub const FLAG_CASTLING: u64 = 1 << 24;

/// Sentinel returned when a search finds no legal move. Callers must test
/// with [`is_null_move`] before applying a search result.
pub const NULL_MOVE: Move = (NO_PIECE_CODE << MOVED_PIECE_SHIFT)
    | (NO_PIECE_CODE << CAPTURED_PIECE_SHIFT)
    | (NO_PIECE_CODE << PROMOTION_PIECE_SHIFT);

#[inline]
pub fn pack_move_description(
    from: Square,
    to: Square,
    moved_piece: PieceKind,
    captured_piece: Option<PieceKind>,
    promotion_piece: Option<PieceKind>,
    flags: u64,
) -> Move {
    let captured_code = captured_piece.map_or(NO_PIECE_CODE, |p| p.index() as u64);
    let promotion_code = promotion_piece.map_or(NO_PIECE_CODE, |p| p.index() as u64);

    ((from as u64) << FROM_SHIFT)
        | ((to as u64) << TO_SHIFT)
        | ((moved_piece.index() as u64) << MOVED_PIECE_SHIFT)
        | (captured_code << CAPTURED_PIECE_SHIFT)
        | (promotion_code << PROMOTION_PIECE_SHIFT)
        | flags
}

#[inline]
pub fn move_from(mv: Move) -> Square {
    ((mv >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_to(mv: Move) -> Square {
    ((mv >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_moved_piece_code(mv: Move) -> u64 {
    (mv >> MOVED_PIECE_SHIFT) & PIECE_MASK
}

#[inline]
pub fn move_captured_piece_code(mv: Move) -> u64 {
    (mv >> CAPTURED_PIECE_SHIFT) & PIECE_MASK
}

#[inline]
pub fn move_promotion_piece_code(mv: Move) -> u64 {
    (mv >> PROMOTION_PIECE_SHIFT) & PIECE_MASK
}

#[inline]
pub fn is_null_move(mv: Move) -> bool {
    move_from(mv) == move_to(mv)
}

/// Decodes a 3-bit piece code back into a `PieceKind`.
pub fn piece_kind_from_code(code: u64) -> Option<PieceKind> {
    match code {
        0 => Some(PieceKind::Pawn),
        1 => Some(PieceKind::Knight),
        2 => Some(PieceKind::Bishop),
        3 => Some(PieceKind::Rook),
        4 => Some(PieceKind::Queen),
        5 => Some(PieceKind::King),
        _ => None,
    }
}
