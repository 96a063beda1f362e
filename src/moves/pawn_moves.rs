//! Precomputed pawn capture masks per color and origin square.
//!
//! These cover diagonal captures only. Pushes are generated with shifted
//! masks by the pawn move generator.

use crate::game_state::chess_types::{Color, Square};

pub static WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(true);
pub static BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(false);

/// Squares a pawn of `color` on `square` attacks.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(white: bool) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut square = 0usize;

    while square < 64 {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let forward = if white { rank + 1 } else { rank - 1 };
        let mut mask = 0u64;

        if forward >= 0 && forward < 8 {
            if file > 0 {
                mask |= 1u64 << (forward * 8 + file - 1);
            }
            if file < 7 {
                mask |= 1u64 << (forward * 8 + file + 1);
            }
        }

        table[square] = mask;
        square += 1;
    }

    table
}
