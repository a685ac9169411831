//! Coordinate notation: files `a`..`p`, ranks `1`..`16`.
//!
//! A move is written as two squares, either joined (`e14e12`) or separated
//! by whitespace or a dash (`e14 e12`, `e14-e12`).

use crate::{error::CoreError, types::*};

pub fn move_to_text(mv: Move) -> String {
    format!("{}{}", sq_to_coord(mv.from), sq_to_coord(mv.to))
}

pub fn parse_square(txt: &str) -> Result<Square, CoreError> {
    coord_to_sq(txt.trim()).ok_or_else(|| CoreError::InvalidSquare(txt.to_string()))
}

pub fn parse_move(txt: &str) -> Result<Move, CoreError> {
    let txt = txt.trim();
    let parts: Vec<&str> = txt
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|p| !p.is_empty())
        .collect();
    let (from, to) = match parts.as_slice() {
        [from, to] => (*from, *to),
        [joined] => {
            // The destination starts at the second file letter.
            let split = joined
                .char_indices()
                .skip(1)
                .find(|(_, c)| c.is_ascii_alphabetic())
                .map(|(i, _)| i)
                .ok_or_else(|| CoreError::InvalidSquare(txt.to_string()))?;
            joined.split_at(split)
        }
        _ => return Err(CoreError::InvalidSquare(txt.to_string())),
    };
    Ok(Move::new(parse_square(from)?, parse_square(to)?))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
