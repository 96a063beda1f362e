//! Precomputed knight attack masks, one per origin square.

use crate::game_state::chess_types::Square;

pub static KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut square = 0usize;

    while square < 64 {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let mut mask = 0u64;

        let mut i = 0usize;
        while i < KNIGHT_DELTAS.len() {
            let (df, dr) = KNIGHT_DELTAS[i];
            let target_file = file + df;
            let target_rank = rank + dr;
            if target_file >= 0 && target_file < 8 && target_rank >= 0 && target_rank < 8 {
                mask |= 1u64 << (target_rank * 8 + target_file);
            }
            i += 1;
        }

        table[square] = mask;
        square += 1;
    }

    table
}
