//! Conversions between square indices and algebraic coordinates like "e4".

use crate::game_state::chess_types::Square;

pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square >= 64 {
        return Err(format!("square index out of range: {square}"));
    }

    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'1' + square / 8);
    Ok(format!("{file}{rank}"))
}

pub fn algebraic_to_square(coords: &str) -> Result<Square, String> {
    let bytes = coords.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("invalid algebraic square: {coords}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(format!("invalid algebraic square: {coords}"));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}
