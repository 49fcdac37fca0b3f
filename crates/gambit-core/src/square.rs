//! Board square representation.
//!
//! Unlike engines that index squares 0-63 and can only represent positions
//! that exist, a [`Square`] here is a plain (row, col) pair that may lie off
//! the board. Move generation constructs candidate squares freely and filters
//! them with [`Square::on_board`] before touching the board.

use std::fmt;
use thiserror::Error;

/// Error returned when parsing a square from algebraic notation fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square: {0:?}")]
pub struct SquareParseError(pub String);

/// A board coordinate, 0-based.
///
/// `row` 0 is White's back rank, `row` 7 is Black's. `col` 0 is the a-file.
/// Squares are immutable values; derived coordinates are produced with
/// [`Square::offset`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Creates a square at the given row and column.
    ///
    /// The coordinates are not validated; off-board squares are representable
    /// and answer `false` to [`Square::on_board`].
    #[inline]
    pub const fn at(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Returns the row (rank index, 0-based).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Returns the column (file index, 0-based).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if this square lies on the 8x8 board.
    #[inline]
    pub const fn on_board(self) -> bool {
        0 <= self.row && self.row < 8 && 0 <= self.col && self.col < 8
    }

    /// Returns the square displaced by the given row and column deltas.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Square {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareParseError(s.to_string()));
        }
        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1];
        if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
            return Err(SquareParseError(s.to_string()));
        }
        Ok(Square::at((row - b'1') as i8, (col - b'a') as i8))
    }

    /// Returns the algebraic notation for this square, if it is on the board.
    pub fn to_algebraic(self) -> Option<String> {
        if self.on_board() {
            Some(format!(
                "{}{}",
                (b'a' + self.col as u8) as char,
                (b'1' + self.row as u8) as char
            ))
        } else {
            None
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(alg) => write!(f, "Square({})", alg),
            None => write!(f, "Square({}, {})", self.row, self.col),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(alg) => write!(f, "{}", alg),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
