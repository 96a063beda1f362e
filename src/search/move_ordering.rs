//! Heuristic move ordering for the alpha-beta search.
//!
//! Each move is paired with an ordering score: captures score victim value
//! minus attacker value, promotions get a large flat bonus plus the
//! promotion piece's value, everything else scores zero. The sort is
//! stable and descending, so equally scored moves keep their generation
//! order and the whole list survives reordering intact.

use crate::game_state::chess_types::Move;
use crate::search::board_scoring::piece_value;
use crate::moves::move_descriptions::{
    move_captured_piece_code, move_moved_piece_code, move_promotion_piece_code,
    piece_kind_from_code, FLAG_CAPTURE,
};

pub const PROMOTION_ORDER_BONUS: i32 = 800;

pub fn order_moves(moves: &[Move]) -> Vec<(Move, i32)> {
    let mut ordered: Vec<(Move, i32)> = moves
        .iter()
        .map(|mv| (*mv, ordering_score(*mv)))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered
}

fn ordering_score(mv: Move) -> i32 {
    let mut score = 0i32;

    if mv & FLAG_CAPTURE != 0 {
        let victim = piece_kind_from_code(move_captured_piece_code(mv))
            .map_or(0, piece_value);
        let attacker = piece_kind_from_code(move_moved_piece_code(mv))
            .map_or(0, piece_value);
        score += victim - attacker;
    }

    if let Some(promotion) = piece_kind_from_code(move_promotion_piece_code(mv)) {
        score += PROMOTION_ORDER_BONUS + piece_value(promotion);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::order_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::moves::move_descriptions::{pack_move_description, FLAG_CAPTURE};

    #[test]
    fn winning_captures_come_before_losing_ones() {
        let pawn_takes_queen = pack_move_description(
            12,
            21,
            PieceKind::Pawn,
            Some(PieceKind::Queen),
            None,
            FLAG_CAPTURE,
        );
        let queen_takes_pawn = pack_move_description(
            3,
            19,
            PieceKind::Queen,
            Some(PieceKind::Pawn),
            None,
            FLAG_CAPTURE,
        );
        let quiet = pack_move_description(1, 18, PieceKind::Knight, None, None, 0);

        let ordered = order_moves(&[quiet, queen_takes_pawn, pawn_takes_queen]);

        assert_eq!(ordered[0].0, pawn_takes_queen);
        assert_eq!(ordered[0].1, 800);
        assert_eq!(ordered[1].0, quiet, "losing captures fall below quiet moves");
        assert_eq!(ordered[2].0, queen_takes_pawn);
        assert_eq!(ordered[2].1, -800);
    }

    #[test]
    fn promotions_outrank_quiet_moves() {
        let promotion =
            pack_move_description(52, 60, PieceKind::Pawn, None, Some(PieceKind::Queen), 0);
        let quiet = pack_move_description(1, 18, PieceKind::Knight, None, None, 0);

        let ordered = order_moves(&[quiet, promotion]);
        assert_eq!(ordered[0].0, promotion);
        assert_eq!(ordered[0].1, 800 + 900);
    }

    #[test]
    fn ordering_preserves_the_move_set_and_ties() {
        let a = pack_move_description(1, 16, PieceKind::Knight, None, None, 0);
        let b = pack_move_description(1, 18, PieceKind::Knight, None, None, 0);
        let c = pack_move_description(6, 21, PieceKind::Knight, None, None, 0);

        let ordered = order_moves(&[a, b, c]);
        let moves: Vec<_> = ordered.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(moves, vec![a, b, c], "stable sort keeps tied moves in order");
    }
}
