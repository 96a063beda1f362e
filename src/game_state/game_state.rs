//! The full position representation.
//!
//! Piece placement is stored as twelve bitboards indexed by color then piece
//! kind, alongside derived per-color occupancy aggregates that are refreshed
//! whenever the piece masks change. Moves are applied in place; the
//! `undo_stack` holds the snapshots needed to reverse them.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square};
use crate::game_state::undo_state::UndoState;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    /// Piece masks indexed `[color][piece kind]`.
    pub pieces: [[u64; 6]; 2],
    /// Union of all piece masks per color. Derived; kept in sync by
    /// [`GameState::refresh_occupancy`].
    pub occupancy: [u64; 2],
    /// Union of both colors' occupancy. Derived.
    pub all_occupancy: u64,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped with its most recent double push, if any.
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    /// Snapshots for in-place move reversal, most recent last.
    pub undo_stack: Vec<UndoState>,
}

impl GameState {
    /// An empty board with White to move and no castling rights.
    pub fn new_empty() -> Self {
        GameState {
            pieces: [[0; 6]; 2],
            occupancy: [0; 2],
            all_occupancy: 0,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            undo_stack: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Result<Self, String> {
        parse_fen(STARTING_POSITION_FEN)
    }

    /// Recomputes the occupancy aggregates from the piece masks.
    #[inline]
    pub fn refresh_occupancy(&mut self) {
        for color_idx in 0..2 {
            self.occupancy[color_idx] = self.pieces[color_idx]
                .iter()
                .fold(0u64, |acc, mask| acc | mask);
        }
        self.all_occupancy = self.occupancy[0] | self.occupancy[1];
    }

    /// Identifies the piece occupying `square`, if any.
    pub fn piece_on_square(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = 1u64 << square;
        if self.all_occupancy & mask == 0 {
            return None;
        }

        for color in [Color::White, Color::Black] {
            if self.occupancy[color.index()] & mask == 0 {
                continue;
            }
            for piece in PieceKind::ALL {
                if self.pieces[color.index()][piece.index()] & mask != 0 {
                    return Some((color, piece));
                }
            }
        }

        None
    }
}

/// Position equality. The undo stack is bookkeeping, not part of the
/// position, so two states reached along different move paths compare equal
/// when their boards and rule fields agree.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_square == other.en_passant_square
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for GameState {}
