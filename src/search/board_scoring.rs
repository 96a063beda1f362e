//! Static evaluation.
//!
//! Scores are always from White's perspective: positive favors White,
//! negative favors Black. The search layer converts to the mover's
//! perspective when comparing root moves.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

/// Centipawn-style piece values. The king's value keeps losing it
/// off-scale relative to any material swing.
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

pub trait BoardScorer: Send + Sync {
    /// Evaluates `game_state` from White's perspective.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Pure material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        material_balance(game_state)
    }
}

/// Material plus a bonus for pawns and knights posted on the four central
/// squares d4, e4, d5, e5.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterControlScorer;

pub const CENTER_BONUS: i32 = 20;
const CENTER_MASK: u64 = (1 << 27) | (1 << 28) | (1 << 35) | (1 << 36);

impl BoardScorer for CenterControlScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let mut score = material_balance(game_state);

        for (color, sign) in [(Color::White, 1), (Color::Black, -1)] {
            let pieces = &game_state.pieces[color.index()];
            let centered = (pieces[PieceKind::Pawn.index()]
                | pieces[PieceKind::Knight.index()])
                & CENTER_MASK;
            score += sign * CENTER_BONUS * centered.count_ones() as i32;
        }

        score
    }
}

fn material_balance(game_state: &GameState) -> i32 {
    let mut score = 0i32;

    for piece in PieceKind::ALL {
        let white = game_state.pieces[Color::White.index()][piece.index()].count_ones() as i32;
        let black = game_state.pieces[Color::Black.index()][piece.index()].count_ones() as i32;
        score += piece_value(piece) * (white - black);
    }

    score
}
