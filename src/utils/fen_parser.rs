//! FEN parsing into a `GameState`.

use crate::game_state::chess_types::{
    CastlingRights, Color, PieceKind, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

/// Parses all six FEN fields. Occupancy aggregates are rebuilt and the undo
/// stack starts empty.
pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(format!(
            "FEN must have 6 fields, found {}: {fen}",
            fields.len()
        ));
    }

    let mut game_state = GameState::new_empty();

    parse_board_field(fields[0], &mut game_state)?;

    game_state.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(format!("invalid side-to-move field: {other}")),
    };

    game_state.castling_rights = parse_castling_field(fields[2])?;

    game_state.en_passant_square = match fields[3] {
        "-" => None,
        coords => Some(algebraic_to_square(coords)?),
    };

    game_state.halfmove_clock = fields[4]
        .parse::<u16>()
        .map_err(|_| format!("invalid halfmove clock: {}", fields[4]))?;
    game_state.fullmove_number = fields[5]
        .parse::<u16>()
        .map_err(|_| format!("invalid fullmove number: {}", fields[5]))?;
    if game_state.fullmove_number == 0 {
        return Err("fullmove number must be at least 1".to_owned());
    }

    game_state.refresh_occupancy();
    Ok(game_state)
}

fn parse_board_field(board: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!(
            "board field must have 8 ranks, found {}: {board}",
            ranks.len()
        ));
    }

    for (row, rank_text) in ranks.iter().enumerate() {
        // FEN lists ranks top down; rank 8 comes first.
        let rank = 7 - row;
        let mut file = 0usize;

        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(format!("invalid empty-square count '{ch}' in {rank_text}"));
                }
                file += skip as usize;
                continue;
            }

            if file >= 8 {
                return Err(format!("rank overflows 8 files: {rank_text}"));
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| format!("invalid piece character '{ch}' in {rank_text}"))?;
            game_state.pieces[color.index()][piece.index()] |= 1u64 << (rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank covers {file} files instead of 8: {rank_text}"));
        }
    }

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

fn parse_castling_field(field: &str) -> Result<CastlingRights, String> {
    if field == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in field.chars() {
        let flag = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(format!("invalid castling character '{ch}' in {field}")),
        };
        if rights & flag != 0 {
            return Err(format!("duplicate castling character '{ch}' in {field}"));
        }
        rights |= flag;
    }

    Ok(rights)
}
