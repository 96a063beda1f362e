//! Rook attack computation by directional ray casting against occupancy.

use crate::game_state::chess_types::Square;

/// Squares a rook on `square` attacks given `occupancy`. The first occupied
/// square along each ray is included; whether it is capturable is the
/// caller's concern.
#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    trace_ray(square, 0, 1, occupancy)
        | trace_ray(square, 0, -1, occupancy)
        | trace_ray(square, 1, 0, occupancy)
        | trace_ray(square, -1, 0, occupancy)
}

/// Walks from `square` one step at a time in the `(file_step, rank_step)`
/// direction, accumulating squares until the board edge or a blocker.
pub fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut mask = 0u64;
    let mut file = (square % 8) as i8 + file_step;
    let mut rank = (square / 8) as i8 + rank_step;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        mask |= bit;
        if occupancy & bit != 0 {
            break;
        }
        file += file_step;
        rank += rank_step;
    }

    mask
}
