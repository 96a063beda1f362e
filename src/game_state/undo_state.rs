//! Snapshot of the irreversible position fields captured before a move is
//! applied, so `unmake_move` can restore the position exactly.

use crate::game_state::chess_types::{CastlingRights, Move, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    /// The packed move that was applied.
    pub mv: Move,
    /// Piece that moved (a pawn for promotions; the promoted piece is
    /// recoverable from the move description).
    pub moved_piece: PieceKind,
    /// Piece removed from the board by this move, if any.
    pub captured_piece: Option<PieceKind>,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
