//! Pseudo-legal king move generation, including castling.
//!
//! Castling is emitted only when the matching right is held, the squares
//! between king and rook are empty, and neither the king's square nor the
//! squares it crosses are attacked. The destination square is vetted like
//! any other king move by the make/check/unmake legality filter.

use crate::game_state::chess_types::{
    Color, Move, PieceKind, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{pack_move_description, FLAG_CASTLING};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;
    let mover_idx = mover.index();
    let kings = game_state.pieces[mover_idx][PieceKind::King.index()];
    if kings == 0 {
        return;
    }

    let from = kings.trailing_zeros() as Square;
    let targets = king_attacks(from) & !game_state.occupancy[mover_idx];
    push_targets(game_state, out, from, PieceKind::King, targets);

    generate_castling_moves(game_state, out, from);
}

struct CastlingLane {
    right: u8,
    king_from: Square,
    king_to: Square,
    /// Must be empty between king and rook.
    empty_mask: u64,
    /// King's square plus the squares it crosses; none may be attacked.
    safe_squares: [Square; 3],
}

const WHITE_LANES: [CastlingLane; 2] = [
    CastlingLane {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        empty_mask: (1 << 5) | (1 << 6),
        safe_squares: [4, 5, 6],
    },
    CastlingLane {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        empty_mask: (1 << 1) | (1 << 2) | (1 << 3),
        safe_squares: [4, 3, 2],
    },
];

const BLACK_LANES: [CastlingLane; 2] = [
    CastlingLane {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        empty_mask: (1 << 61) | (1 << 62),
        safe_squares: [60, 61, 62],
    },
    CastlingLane {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        empty_mask: (1 << 57) | (1 << 58) | (1 << 59),
        safe_squares: [60, 59, 58],
    },
];

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_square: Square) {
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();
    let lanes = match mover {
        Color::White => &WHITE_LANES,
        Color::Black => &BLACK_LANES,
    };

    for lane in lanes {
        if game_state.castling_rights & lane.right == 0 {
            continue;
        }
        if king_square != lane.king_from {
            continue;
        }
        if game_state.all_occupancy & lane.empty_mask != 0 {
            continue;
        }
        if lane
            .safe_squares
            .iter()
            .any(|sq| is_square_attacked(game_state, *sq, enemy))
        {
            continue;
        }

        out.push(pack_move_description(
            lane.king_from,
            lane.king_to,
            PieceKind::King,
            None,
            None,
            FLAG_CASTLING,
        ));
    }
}
