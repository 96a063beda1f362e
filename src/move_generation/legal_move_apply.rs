//! In-place move application and reversal.
//!
//! `make_move` mutates the position directly after pushing an `UndoState`
//! snapshot of every irreversible field; `unmake_move` pops the snapshot and
//! restores the position exactly. The pair is the workhorse of both the
//! legality filter and the search tree walk, which never copy the board.

use crate::game_state::chess_types::{
    CastlingRights, Color, Move, PieceKind, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::{
    move_from, move_promotion_piece_code, move_to, piece_kind_from_code, FLAG_CASTLING,
    FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

/// Applies `mv` to `game_state`, flipping the side to move. On success the
/// undo stack gains one entry; on error the position is untouched.
pub fn make_move(game_state: &mut GameState, mv: Move) -> Result<(), String> {
    let from = move_from(mv);
    let to = move_to(mv);
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();

    let moved_piece = match game_state.piece_on_square(from) {
        Some((color, piece)) if color == mover => piece,
        Some(_) => {
            return Err(format!(
                "piece on from-square {from} does not belong to the side to move"
            ))
        }
        None => return Err(format!("no piece on from-square {from}")),
    };

    // Work out what the move removes before mutating anything.
    let (captured_piece, capture_square) = if mv & FLAG_EN_PASSANT != 0 {
        let capture_square = match mover {
            Color::White => to.checked_sub(8),
            Color::Black => to.checked_add(8).filter(|sq| *sq < 64),
        }
        .ok_or_else(|| format!("en passant capture square off the board for target {to}"))?;
        (Some(PieceKind::Pawn), capture_square)
    } else {
        match game_state.piece_on_square(to) {
            Some((color, piece)) if color == enemy => (Some(piece), to),
            Some(_) => return Err(format!("destination square {to} holds a friendly piece")),
            None => (None, to),
        }
    };

    let rook_shuffle = if mv & FLAG_CASTLING != 0 && moved_piece == PieceKind::King {
        Some(
            castling_rook_squares(from, to)
                .ok_or_else(|| format!("castling flag on non-castling move {from}->{to}"))?,
        )
    } else {
        None
    };

    game_state.undo_stack.push(UndoState {
        mv,
        moved_piece,
        captured_piece,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    let mover_idx = mover.index();
    if let Some(captured) = captured_piece {
        game_state.pieces[enemy.index()][captured.index()] &= !(1u64 << capture_square);
    }

    game_state.pieces[mover_idx][moved_piece.index()] &= !(1u64 << from);
    let placed_piece =
        piece_kind_from_code(move_promotion_piece_code(mv)).unwrap_or(moved_piece);
    game_state.pieces[mover_idx][placed_piece.index()] |= 1u64 << to;

    if let Some((rook_home, rook_castled)) = rook_shuffle {
        let rooks = &mut game_state.pieces[mover_idx][PieceKind::Rook.index()];
        *rooks &= !(1u64 << rook_home);
        *rooks |= 1u64 << rook_castled;
    }

    game_state.castling_rights &=
        !(castling_rights_cleared_by(from) | castling_rights_cleared_by(to));

    game_state.en_passant_square =
        if moved_piece == PieceKind::Pawn && mv & FLAG_DOUBLE_PAWN_PUSH != 0 {
            Some(((from as u16 + to as u16) / 2) as Square)
        } else {
            None
        };

    if moved_piece == PieceKind::Pawn || captured_piece.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock += 1;
    }

    if mover == Color::Black {
        game_state.fullmove_number += 1;
    }

    game_state.refresh_occupancy();
    game_state.side_to_move = enemy;

    Ok(())
}

/// Reverses the most recent `make_move`. Returns `false` without touching
/// the position when the undo stack is empty.
pub fn unmake_move(game_state: &mut GameState) -> bool {
    let Some(undo) = game_state.undo_stack.pop() else {
        return false;
    };

    let mover = game_state.side_to_move.opposite();
    let mover_idx = mover.index();
    let mv = undo.mv;
    let from = move_from(mv);
    let to = move_to(mv);

    // Promotions placed the promoted piece on `to`; the pawn returns home.
    let placed_piece =
        piece_kind_from_code(move_promotion_piece_code(mv)).unwrap_or(undo.moved_piece);
    game_state.pieces[mover_idx][placed_piece.index()] &= !(1u64 << to);
    game_state.pieces[mover_idx][undo.moved_piece.index()] |= 1u64 << from;

    if mv & FLAG_CASTLING != 0 {
        if let Some((rook_home, rook_castled)) = castling_rook_squares(from, to) {
            let rooks = &mut game_state.pieces[mover_idx][PieceKind::Rook.index()];
            *rooks &= !(1u64 << rook_castled);
            *rooks |= 1u64 << rook_home;
        }
    }

    if let Some(captured) = undo.captured_piece {
        let capture_square = if mv & FLAG_EN_PASSANT != 0 {
            match mover {
                Color::White => to - 8,
                Color::Black => to + 8,
            }
        } else {
            to
        };
        game_state.pieces[mover.opposite().index()][captured.index()] |= 1u64 << capture_square;
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
    game_state.side_to_move = mover;
    game_state.refresh_occupancy();

    true
}

/// `(rook home square, rook castled square)` for a king castling hop, or
/// `None` if `from`/`to` is not one of the four castling king paths.
fn castling_rook_squares(from: Square, to: Square) -> Option<(Square, Square)> {
    match (from, to) {
        (4, 6) => Some((7, 5)),
        (4, 2) => Some((0, 3)),
        (60, 62) => Some((63, 61)),
        (60, 58) => Some((56, 59)),
        _ => None,
    }
}

/// Rights lost when a move starts or ends on `square`. Covers king moves,
/// rook moves, and captures of a rook on its home square.
fn castling_rights_cleared_by(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        4 => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        60 => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
