//! Grid coordinate parsing for typed moves.
//!
//! Columns are lettered `A`-`C`, rows numbered `1`-`3`. Either order is
//! accepted (`B2` or `2B`), in any case.

use derive_more::{Display, Error};
use noughts_core::Position;
use tracing::instrument;

/// Input that is not a grid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid grid coordinates: {:?}", input)]
pub struct CoordinateError {
    /// The rejected input.
    pub input: String,
}

/// Parses `A1`-style coordinates into a board position.
///
/// The index is `3 * (row - 1) + (column - 'A')`.
#[instrument]
pub fn parse_coordinates(input: &str) -> Result<Position, CoordinateError> {
    let invalid = || CoordinateError {
        input: input.to_string(),
    };

    let chars: Vec<char> = input.chars().collect();
    let (column, row) = match chars.as_slice() {
        [c, r] if is_column(*c) && is_row(*r) => (*c, *r),
        [r, c] if is_row(*r) && is_column(*c) => (*c, *r),
        _ => return Err(invalid()),
    };

    let column = (column.to_ascii_uppercase() as u8 - b'A') as usize;
    let row = (row as u8 - b'1') as usize;
    Position::from_row_column(row, column).ok_or_else(invalid)
}

fn is_column(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A'..='C')
}

fn is_row(c: char) -> bool {
    matches!(c, '1'..='3')
}
