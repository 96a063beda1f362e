//! Precomputed king attack masks, one per origin square. Castling is not an
//! attack and is handled by the king move generator.

use crate::game_state::chess_types::Square;

pub static KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut square = 0usize;

    while square < 64 {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let mut mask = 0u64;

        let mut df = -1i8;
        while df <= 1 {
            let mut dr = -1i8;
            while dr <= 1 {
                if df != 0 || dr != 0 {
                    let target_file = file + df;
                    let target_rank = rank + dr;
                    if target_file >= 0
                        && target_file < 8
                        && target_rank >= 0
                        && target_rank < 8
                    {
                        mask |= 1u64 << (target_rank * 8 + target_file);
                    }
                }
                dr += 1;
            }
            df += 1;
        }

        table[square] = mask;
        square += 1;
    }

    table
}
