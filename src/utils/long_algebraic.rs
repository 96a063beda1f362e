//! Long algebraic move notation, e.g. "e2e4" or "a7a8q".
//!
//! Parsing reconstructs the full packed description (capture, double push,
//! castling, and en passant flags) from the notation plus the position it
//! applies to.

use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{
    move_from, move_promotion_piece_code, move_to, pack_move_description, piece_kind_from_code,
    FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, NO_PIECE_CODE,
};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_description_to_long_algebraic(
    mv: Move,
    game_state: &GameState,
) -> Result<String, String> {
    let from = move_from(mv);
    let to = move_to(mv);

    let (color_on_from, _) = game_state
        .piece_on_square(from)
        .ok_or_else(|| format!("no piece on from-square {from}"))?;
    if color_on_from != game_state.side_to_move {
        return Err("from-square piece does not belong to the side to move".to_owned());
    }

    let mut out = String::new();
    out.push_str(&square_to_algebraic(from)?);
    out.push_str(&square_to_algebraic(to)?);

    let promotion_code = move_promotion_piece_code(mv);
    if promotion_code != NO_PIECE_CODE {
        let promotion_piece = piece_kind_from_code(promotion_code)
            .ok_or_else(|| format!("invalid promotion piece code: {promotion_code}"))?;
        out.push(promotion_to_char(promotion_piece)?);
    }

    Ok(out)
}

pub fn long_algebraic_to_move_description(
    notation: &str,
    game_state: &GameState,
) -> Result<Move, String> {
    let bytes = notation.as_bytes();
    // The ASCII check makes the byte-offset slices below safe.
    if !notation.is_ascii() || (bytes.len() != 4 && bytes.len() != 5) {
        return Err(format!("invalid long algebraic move: {notation}"));
    }

    let from = algebraic_to_square(&notation[0..2])?;
    let to = algebraic_to_square(&notation[2..4])?;

    let (moving_color, moved_piece) = game_state
        .piece_on_square(from)
        .ok_or_else(|| format!("no piece on from-square: {}", &notation[0..2]))?;
    if moving_color != game_state.side_to_move {
        return Err("attempted to move a piece that is not on side to move".to_owned());
    }

    let target = game_state.piece_on_square(to);
    if let Some((target_color, _)) = target {
        if target_color == moving_color {
            return Err(format!("destination {} holds a friendly piece", &notation[2..4]));
        }
    }

    let mut captured_piece = target.map(|(_, piece)| piece);
    let mut flags = 0u64;

    if captured_piece.is_some() {
        flags |= FLAG_CAPTURE;
    }

    if moved_piece == PieceKind::Pawn && from.abs_diff(to) == 16 {
        flags |= FLAG_DOUBLE_PAWN_PUSH;
    }

    if moved_piece == PieceKind::King && from.abs_diff(to) == 2 {
        flags |= FLAG_CASTLING;
    }

    if moved_piece == PieceKind::Pawn
        && game_state.en_passant_square == Some(to)
        && from % 8 != to % 8
        && target.is_none()
    {
        let capture_square = match moving_color {
            Color::White => to.checked_sub(8),
            Color::Black => to.checked_add(8).filter(|sq| *sq < 64),
        }
        .ok_or("invalid en passant capture square")?;

        match game_state.piece_on_square(capture_square) {
            Some((color, PieceKind::Pawn)) if color != moving_color => {
                captured_piece = Some(PieceKind::Pawn);
                flags |= FLAG_CAPTURE | FLAG_EN_PASSANT;
            }
            _ => return Err("en passant target set but no capturable pawn found".to_owned()),
        }
    }

    let promotion_piece = if bytes.len() == 5 {
        if moved_piece != PieceKind::Pawn {
            return Err("only pawns may promote".to_owned());
        }
        let rank = to / 8;
        if rank != 0 && rank != 7 {
            return Err("promotion move must end on a back rank".to_owned());
        }
        Some(char_to_promotion(bytes[4] as char)?)
    } else {
        if moved_piece == PieceKind::Pawn {
            let rank = to / 8;
            if rank == 0 || rank == 7 {
                return Err(format!("missing promotion piece in {notation}"));
            }
        }
        None
    };

    Ok(pack_move_description(
        from,
        to,
        moved_piece,
        captured_piece,
        promotion_piece,
        flags,
    ))
}

fn promotion_to_char(piece: PieceKind) -> Result<char, String> {
    match piece {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        _ => Err(format!("invalid promotion piece: {piece:?}")),
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(format!("invalid promotion piece character: {ch}")),
    }
}
