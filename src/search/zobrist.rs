//! Zobrist position hashing.
//!
//! The random tables are generated once from a fixed seed so keys are
//! stable across runs and across the per-root search threads, which rely on
//! identical keys when they probe their private transposition tables.
//!
//! The en passant file is hashed only when the side to move can actually
//! play the capture this ply. Positions that differ only by a dead en
//! passant target are transpositions and should share a key.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::pawn_moves::pawn_attacks;

const ZOBRIST_SEED: u64 = 20240524;

struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_square = [[[0u64; 64]; 6]; 2];

        for color_table in piece_square.iter_mut() {
            for piece_table in color_table.iter_mut() {
                for square_value in piece_table.iter_mut() {
                    *square_value = rng.random();
                }
            }
        }

        let side_to_move = rng.random();

        let mut castling = [0u64; 16];
        for value in castling.iter_mut() {
            *value = rng.random();
        }

        let mut en_passant_file = [0u64; 8];
        for value in en_passant_file.iter_mut() {
            *value = rng.random();
        }

        ZobristTables {
            piece_square,
            side_to_move,
            castling,
            en_passant_file,
        }
    })
}

/// Hashes the full position: piece placement, side to move, castling
/// rights, and a live en passant file.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for color in [Color::White, Color::Black] {
        for piece in PieceKind::ALL {
            let mut mask = game_state.pieces[color.index()][piece.index()];
            while mask != 0 {
                let square = mask.trailing_zeros() as usize;
                mask &= mask - 1;
                key ^= tables.piece_square[color.index()][piece.index()][square];
            }
        }
    }

    if game_state.side_to_move == Color::Black {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[(game_state.castling_rights & 0xF) as usize];

    if let Some(ep_square) = game_state.en_passant_square {
        if en_passant_capturable(game_state, ep_square) {
            key ^= tables.en_passant_file[(ep_square % 8) as usize];
        }
    }

    key
}

/// True when a pawn of the side to move stands on a square from which it
/// could capture onto the en passant target.
fn en_passant_capturable(game_state: &GameState, ep_square: Square) -> bool {
    let mover = game_state.side_to_move;
    let mover_pawns = game_state.pieces[mover.index()][PieceKind::Pawn.index()];
    // A pawn of the opposing color on the target square would attack
    // exactly the squares our capturing pawns must occupy.
    pawn_attacks(mover.opposite(), ep_square) & mover_pawns != 0
}

#[cfg(test)]
mod tests {
    use super::compute_zobrist_key;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn key_is_deterministic() {
        let a = GameState::new_game().expect("starting position should parse");
        let b = GameState::new_game().expect("starting position should parse");
        assert_eq!(compute_zobrist_key(&a), compute_zobrist_key(&b));
    }

    #[test]
    fn side_to_move_changes_the_key() {
        let white = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let black = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_ne!(compute_zobrist_key(&white), compute_zobrist_key(&black));
    }

    #[test]
    fn castling_rights_change_the_key() {
        let all = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let none = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_ne!(compute_zobrist_key(&all), compute_zobrist_key(&none));
    }

    #[test]
    fn dead_en_passant_target_does_not_change_the_key() {
        // No white pawn can play the capture, so the target is inert.
        let with_target =
            parse_fen("4k3/8/8/3p4/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let without =
            parse_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(compute_zobrist_key(&with_target), compute_zobrist_key(&without));
    }

    #[test]
    fn live_en_passant_target_changes_the_key() {
        let with_target =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let without =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_ne!(compute_zobrist_key(&with_target), compute_zobrist_key(&without));
    }

    #[test]
    fn clocks_do_not_affect_the_key() {
        let early = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let late = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 40 77").expect("FEN should parse");
        assert_eq!(compute_zobrist_key(&early), compute_zobrist_key(&late));
    }
}
