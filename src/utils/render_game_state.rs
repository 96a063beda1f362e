//! Plain-text board rendering for the console driver.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

/// Renders the board from White's point of view with rank and file labels.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = rank * 8 + file;
            let glyph = match game_state.piece_on_square(square) {
                Some((color, piece)) => piece_to_unicode(color, piece),
                None => '.',
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
