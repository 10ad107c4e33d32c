//! Line tokenizer: `Q0,Z3,I4` into placements.

use stack_core::{Placement, ShapeId};

use crate::error::SimError;

/// Whitespace around the line and around each token is ignored.
/// An empty line holds no placements.
pub fn parse_line(line: &str) -> Result<Vec<Placement>, SimError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }
    line.split(',').map(parse_token).collect()
}

/// One identifier character followed by a base-10 column offset.
pub fn parse_token(token: &str) -> Result<Placement, SimError> {
    let token = token.trim();
    let malformed = || SimError::MalformedToken(token.to_string());

    let mut chars = token.chars();
    let symbol = chars.next().ok_or_else(malformed)?;
    let shape = ShapeId::try_from(symbol)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let x = digits.parse::<i32>().map_err(|_| malformed())?;

    Ok(Placement::new(shape, x))
}
