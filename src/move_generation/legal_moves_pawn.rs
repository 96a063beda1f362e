//! Pseudo-legal pawn move generation with shifted masks.
//!
//! Whole pawn sets are advanced at once: single pushes shift into empty
//! squares, double pushes shift twice from the start rank, and captures
//! shift diagonally into enemy occupancy with file masks preventing board
//! wrap. Promotions are emitted as queen promotions only; the move format
//! supports every promotion piece but the generator does not enumerate
//! underpromotions.

use crate::game_state::chess_rules::{FILE_A, FILE_H, RANK_1, RANK_2, RANK_7, RANK_8};
use crate::game_state::chess_types::{Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{
    pack_move_description, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

#[inline]
fn shift(mask: u64, offset: i8) -> u64 {
    if offset >= 0 {
        mask << offset
    } else {
        mask >> -offset
    }
}

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mover = game_state.side_to_move;
    let pawns = game_state.pieces[mover.index()][PieceKind::Pawn.index()];
    if pawns == 0 {
        return;
    }

    let empty = !game_state.all_occupancy;
    let enemy = game_state.occupancy[mover.opposite().index()];

    let (up, start_rank, promotion_rank) = match mover {
        Color::White => (8i8, RANK_2, RANK_8),
        Color::Black => (-8i8, RANK_7, RANK_1),
    };
    // West shifts toward the a-file, east toward the h-file. The file mask
    // on the target set discards pawns that would wrap around the board.
    let (west, east) = match mover {
        Color::White => (7i8, 9i8),
        Color::Black => (-9i8, -7i8),
    };

    let single_pushes = shift(pawns, up) & empty;
    push_pawn_targets(game_state, out, single_pushes, up, promotion_rank, 0);

    let double_pushes = shift(shift(pawns & start_rank, up) & empty, up) & empty;
    push_pawn_targets(
        game_state,
        out,
        double_pushes,
        2 * up,
        promotion_rank,
        FLAG_DOUBLE_PAWN_PUSH,
    );

    let west_captures = shift(pawns, west) & !FILE_H & enemy;
    push_pawn_targets(game_state, out, west_captures, west, promotion_rank, FLAG_CAPTURE);

    let east_captures = shift(pawns, east) & !FILE_A & enemy;
    push_pawn_targets(game_state, out, east_captures, east, promotion_rank, FLAG_CAPTURE);

    if let Some(ep_square) = game_state.en_passant_square {
        let ep_mask = 1u64 << ep_square;
        let ep_flags = FLAG_CAPTURE | FLAG_EN_PASSANT;

        let west_ep = shift(pawns, west) & !FILE_H & ep_mask;
        push_pawn_targets(game_state, out, west_ep, west, promotion_rank, ep_flags);

        let east_ep = shift(pawns, east) & !FILE_A & ep_mask;
        push_pawn_targets(game_state, out, east_ep, east, promotion_rank, ep_flags);
    }
}

fn push_pawn_targets(
    game_state: &GameState,
    out: &mut Vec<Move>,
    mut targets: u64,
    from_offset: i8,
    promotion_rank: u64,
    flags: u64,
) {
    let mover = game_state.side_to_move;

    while targets != 0 {
        let to = targets.trailing_zeros() as i8;
        targets &= targets - 1;
        let from = (to - from_offset) as Square;
        let to = to as Square;

        let captured = if flags & FLAG_EN_PASSANT != 0 {
            Some(PieceKind::Pawn)
        } else if flags & FLAG_CAPTURE != 0 {
            enemy_piece_on(game_state, mover, to)
        } else {
            None
        };

        let promotion = if (1u64 << to) & promotion_rank != 0 {
            Some(PieceKind::Queen)
        } else {
            None
        };

        out.push(pack_move_description(from, to, PieceKind::Pawn, captured, promotion, flags));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::moves::move_descriptions::{
        move_captured_piece_code, move_from, move_promotion_piece_code, move_to,
        piece_kind_from_code, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, NO_PIECE_CODE,
    };
    use crate::game_state::chess_types::PieceKind;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_rank_pawns_get_single_and_double_pushes() {
        let game_state =
            parse_fen("8/8/8/8/8/8/PPPPPPPP/4K3 w KQkq - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        assert_eq!(moves.len(), 16, "eight pawns, two pushes each");
        for from in 8..16u8 {
            let pushes: Vec<_> = moves.iter().filter(|mv| move_from(**mv) == from).collect();
            assert_eq!(pushes.len(), 2);
        }
        let doubles = moves
            .iter()
            .filter(|mv| *mv & FLAG_DOUBLE_PAWN_PUSH != 0)
            .count();
        assert_eq!(doubles, 8);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let game_state =
            parse_fen("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        assert!(moves.is_empty(), "a blocked pawn without captures has no moves");
    }

    #[test]
    fn start_pawn_with_diagonal_enemy_has_three_moves() {
        let game_state =
            parse_fen("k7/8/8/8/8/3p4/4P3/K7 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        assert_eq!(moves.len(), 3);
        let targets: Vec<u8> = moves.iter().map(|mv| move_to(*mv)).collect();
        assert!(targets.contains(&20), "e3 push");
        assert!(targets.contains(&28), "e4 double push");
        assert!(targets.contains(&19), "d3 capture");
        let capture = moves
            .iter()
            .find(|mv| *mv & FLAG_CAPTURE != 0)
            .expect("capture should be generated");
        assert_eq!(
            piece_kind_from_code(move_captured_piece_code(*capture)),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn edge_pawn_captures_do_not_wrap() {
        // White pawn on a4, black pawn on h5: no capture exists.
        let game_state =
            parse_fen("4k3/8/8/7p/P7/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        assert_eq!(moves.len(), 1);
        assert_eq!(move_to(moves[0]), 32, "only the a5 push");
    }

    #[test]
    fn promotion_is_emitted_as_queen_only() {
        let game_state = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        assert_eq!(moves.len(), 1);
        assert_eq!(
            piece_kind_from_code(move_promotion_piece_code(moves[0])),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn capture_promotion_carries_both_flags() {
        let game_state =
            parse_fen("1r6/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        // a8 push promotion plus axb8 capture promotion.
        assert_eq!(moves.len(), 2);
        let capture = moves
            .iter()
            .find(|mv| *mv & FLAG_CAPTURE != 0)
            .expect("capture promotion should be generated");
        assert_eq!(move_to(*capture), 57);
        assert_ne!(move_promotion_piece_code(*capture), NO_PIECE_CODE);
    }

    #[test]
    fn en_passant_capture_is_generated_when_target_set() {
        let game_state =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        let ep = moves
            .iter()
            .find(|mv| *mv & FLAG_EN_PASSANT != 0)
            .expect("en passant capture should be generated");
        assert_eq!(move_from(*ep), 36);
        assert_eq!(move_to(*ep), 43);
        assert_ne!(ep & FLAG_CAPTURE, 0);
    }

    #[test]
    fn black_pawns_move_toward_rank_one() {
        let game_state =
            parse_fen("4k3/3p4/4P3/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game_state, &mut moves);

        let targets: Vec<u8> = moves.iter().map(|mv| move_to(*mv)).collect();
        assert!(targets.contains(&43), "d6 push");
        assert!(targets.contains(&35), "d5 double push");
        assert!(targets.contains(&44), "exd capture onto e6");
        assert_eq!(moves.len(), 3);
    }
}
