//! Parse Utilities
//!
//! Source positions and the offset-to-position resolver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chars;

/// A row/column location in the source text. Rows and columns are both
/// zero-based; sentinel tokens carry the zero position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Error raised by the checked resolver entry point. The tolerant
/// [`position_at`] never fails; this exists only at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("offset {offset} is out of range for input of {len} characters")]
    OutOfRange { offset: usize, len: usize },
}

/// Resolve an absolute character offset into a row/column pair by walking
/// the newline-delimited lines of `input`.
///
/// The walk subtracts `line length + 1` from the remainder for every line
/// the offset lies past, then reads the column off the line it lands in.
/// An offset of 0, or one that lands exactly on a line boundary, falls
/// through both guards and resolves with the zero-valued default column.
/// Callers are responsible for keeping `offset` within
/// `0..=char_count(input)`; see [`try_position_at`] for a checked variant.
pub fn position_at(offset: usize, input: &str) -> Position {
    let mut remainder = offset;
    let mut position = Position::default();

    for line in input.split(chars::NEWLINE) {
        let line_len = line.chars().count();
        if remainder > line_len {
            // +1 for the line break
            remainder -= line_len + 1;
            position.row += 1;
        } else if line_len > remainder && remainder > 0 {
            position.col = remainder;
            break;
        }
    }

    position
}

/// Checked variant of [`position_at`] that rejects offsets past the end of
/// the input instead of walking off the line table.
pub fn try_position_at(offset: usize, input: &str) -> Result<Position, PositionError> {
    let len = input.chars().count();
    if offset > len {
        return Err(PositionError::OutOfRange { offset, len });
    }
    Ok(position_at(offset, input))
}
