//! Legal move generation and terminal position queries.
//!
//! Pseudo-legal moves from the per-piece generators are filtered by playing
//! each one on a scratch copy and asking whether the mover's king is left
//! attacked. There is no pinned-piece fast path; the make/check/unmake probe
//! handles pins, en passant discoveries, and check evasions uniformly.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    MoveGenResult, MoveGenerationError, MoveGenerator,
};

/// Every pseudo-legal move for the side to move, king safety not yet
/// considered.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate_pawn_moves(game_state, &mut moves);
    generate_knight_moves(game_state, &mut moves);
    generate_bishop_moves(game_state, &mut moves);
    generate_rook_moves(game_state, &mut moves);
    generate_queen_moves(game_state, &mut moves);
    generate_king_moves(game_state, &mut moves);
    moves
}

/// Every legal move for the side to move. An empty result means checkmate
/// or stalemate.
pub fn generate_legal_moves(game_state: &GameState) -> MoveGenResult<Vec<Move>> {
    let pseudo_legal = generate_pseudo_legal_moves(game_state);
    let mover = game_state.side_to_move;
    let mut scratch = game_state.clone();
    let mut legal = Vec::with_capacity(pseudo_legal.len());

    for mv in pseudo_legal {
        make_move(&mut scratch, mv).map_err(MoveGenerationError::InvalidState)?;
        if !is_king_in_check(&scratch, mover) {
            legal.push(mv);
        }
        unmake_move(&mut scratch);
    }

    Ok(legal)
}

pub fn is_checkmate(game_state: &GameState) -> MoveGenResult<bool> {
    if !is_king_in_check(game_state, game_state.side_to_move) {
        return Ok(false);
    }
    Ok(generate_legal_moves(game_state)?.is_empty())
}

pub fn is_stalemate(game_state: &GameState) -> MoveGenResult<bool> {
    if is_king_in_check(game_state, game_state.side_to_move) {
        return Ok(false);
    }
    Ok(generate_legal_moves(game_state)?.is_empty())
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<Move>> {
        generate_legal_moves(game_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::{make_move, unmake_move};
    use crate::moves::move_descriptions::{move_from, move_to};
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::move_description_to_long_algebraic;

    fn legal_lans(fen: &str) -> Vec<String> {
        let game_state = parse_fen(fen).expect("FEN should parse");
        let moves = generate_legal_moves(&game_state).expect("generation should succeed");
        moves
            .iter()
            .map(|mv| {
                move_description_to_long_algebraic(*mv, &game_state)
                    .expect("legal move should render")
            })
            .collect()
    }

    fn lone_piece_legal_moves(
        piece: crate::game_state::chess_types::PieceKind,
        square: u8,
    ) -> usize {
        use crate::game_state::chess_types::Color;

        let mut game_state = GameState::new_empty();
        game_state.pieces[Color::White.index()][piece.index()] = 1u64 << square;
        game_state.refresh_occupancy();

        generate_legal_moves(&game_state)
            .expect("generation should succeed")
            .len()
    }

    #[test]
    fn lone_piece_open_board_counts_on_every_square() {
        use crate::game_state::chess_types::PieceKind;

        const KNIGHT_DELTAS: [(i32, i32); 8] = [
            (1, 2),
            (2, 1),
            (2, -1),
            (1, -2),
            (-1, -2),
            (-2, -1),
            (-2, 1),
            (-1, 2),
        ];

        for square in 0..64u8 {
            let file = (square % 8) as i32;
            let rank = (square / 8) as i32;
            // Distance from the board edge; each step inward lengthens the
            // short diagonals by two squares.
            let ring = file.min(7 - file).min(rank).min(7 - rank) as usize;

            assert_eq!(
                lone_piece_legal_moves(PieceKind::Rook, square),
                14,
                "rook on square {square}"
            );
            assert_eq!(
                lone_piece_legal_moves(PieceKind::Bishop, square),
                7 + 2 * ring,
                "bishop on square {square}"
            );
            assert_eq!(
                lone_piece_legal_moves(PieceKind::Queen, square),
                21 + 2 * ring,
                "queen on square {square}"
            );

            let file_span: usize = if file == 0 || file == 7 { 2 } else { 3 };
            let rank_span: usize = if rank == 0 || rank == 7 { 2 } else { 3 };
            assert_eq!(
                lone_piece_legal_moves(PieceKind::King, square),
                file_span * rank_span - 1,
                "king on square {square}"
            );

            let knight_expected = KNIGHT_DELTAS
                .iter()
                .filter(|(df, dr)| {
                    (0..8).contains(&(file + df)) && (0..8).contains(&(rank + dr))
                })
                .count();
            assert_eq!(
                lone_piece_legal_moves(PieceKind::Knight, square),
                knight_expected,
                "knight on square {square}"
            );
        }
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game_state = GameState::new_game().expect("starting position should parse");
        let moves = generate_legal_moves(&game_state).expect("generation should succeed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn checked_king_has_only_escape_and_capture() {
        let mut lans = legal_lans("k7/8/8/8/8/8/5q2/4K3 w - - 0 1");
        lans.sort();
        assert_eq!(lans, vec!["e1d1".to_owned(), "e1f2".to_owned()]);
    }

    #[test]
    fn queen_supported_by_rook_is_checkmate() {
        let game_state =
            parse_fen("k7/8/8/8/8/4r3/4q3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = generate_legal_moves(&game_state).expect("generation should succeed");

        assert!(moves.is_empty());
        assert!(is_checkmate(&game_state).expect("query should succeed"));
        assert!(!is_stalemate(&game_state).expect("query should succeed"));
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let game_state = parse_fen("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let moves = generate_legal_moves(&game_state).expect("generation should succeed");

        assert!(moves.is_empty());
        assert!(is_stalemate(&game_state).expect("query should succeed"));
        assert!(!is_checkmate(&game_state).expect("query should succeed"));
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        // The d2 rook is pinned to the king by the d8 rook and may only
        // slide along the d-file.
        let lans = legal_lans("3r4/8/8/8/8/8/3R4/3K4 w - - 0 1");
        assert!(lans.contains(&"d2d5".to_owned()));
        assert!(!lans.contains(&"d2e2".to_owned()), "leaving the file is illegal");
        assert!(!lans.contains(&"d2a2".to_owned()));
    }

    #[test]
    fn every_legal_move_leaves_the_mover_safe() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "k7/8/8/8/8/8/5q2/4K3 w - - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3",
        ] {
            let game_state = parse_fen(fen).expect("FEN should parse");
            let mover = game_state.side_to_move;
            let moves = generate_legal_moves(&game_state).expect("generation should succeed");
            let mut scratch = game_state.clone();

            for mv in moves {
                make_move(&mut scratch, mv).expect("legal move should apply");
                assert!(
                    !crate::move_generation::legal_move_checks::is_king_in_check(
                        &scratch, mover
                    ),
                    "move {}->{} leaves the king attacked in {fen}",
                    move_from(mv),
                    move_to(mv)
                );
                unmake_move(&mut scratch);
                assert_eq!(scratch, game_state, "unmake must restore the position");
            }
        }
    }

    #[test]
    fn en_passant_cycle_generates_and_reverses() {
        let mut game_state = GameState::new_game().expect("starting position should parse");
        let e4 = crate::utils::long_algebraic::long_algebraic_to_move_description(
            "e2e4",
            &game_state,
        )
        .expect("move should parse");
        make_move(&mut game_state, e4).expect("move should apply");
        let a6 = crate::utils::long_algebraic::long_algebraic_to_move_description(
            "a7a6",
            &game_state,
        )
        .expect("move should parse");
        make_move(&mut game_state, a6).expect("move should apply");
        let e5 = crate::utils::long_algebraic::long_algebraic_to_move_description(
            "e4e5",
            &game_state,
        )
        .expect("move should parse");
        make_move(&mut game_state, e5).expect("move should apply");
        let d5 = crate::utils::long_algebraic::long_algebraic_to_move_description(
            "d7d5",
            &game_state,
        )
        .expect("move should parse");
        make_move(&mut game_state, d5).expect("move should apply");

        assert_eq!(game_state.en_passant_square, Some(43), "d6 is capturable");
        let moves = generate_legal_moves(&game_state).expect("generation should succeed");
        let ep_capture = moves
            .iter()
            .find(|mv| move_from(**mv) == 36 && move_to(**mv) == 43)
            .copied()
            .expect("exd6 en passant should be legal");

        let before = game_state.clone();
        make_move(&mut game_state, ep_capture).expect("move should apply");
        assert_eq!(game_state.en_passant_square, None);
        unmake_move(&mut game_state);
        assert_eq!(game_state, before, "en passant undo restores the target square");
    }
}
