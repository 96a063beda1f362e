//! Bishop attack computation by directional ray casting against occupancy.

use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

/// Squares a bishop on `square` attacks given `occupancy`. The first
/// occupied square along each diagonal is included.
#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    trace_ray(square, 1, 1, occupancy)
        | trace_ray(square, 1, -1, occupancy)
        | trace_ray(square, -1, 1, occupancy)
        | trace_ray(square, -1, -1, occupancy)
}
