//! Board coordinates.

#[cfg(test)]
#[path = "square_test.rs"]
mod square_test;

use std::fmt;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;

/// One of the 64 board positions, addressed by `(row, col)`.
///
/// Row 0 is black's back rank and row 7 is white's, matching the order the
/// grid is drawn top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, returning `None` when either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Position in the 64-slot board table.
    pub fn index(self) -> usize {
        usize::from(self.row) * usize::from(BOARD_SIZE) + usize::from(self.col)
    }

    /// Light squares sit where `row + col` is even; `(0,0)` is light.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// All squares in render order: row by row, left to right.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

/// Algebraic name, e.g. `(6,4)` is `e2`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = BOARD_SIZE - self.row;
        write!(f, "{file}{rank}")
    }
}
