//! Square-indexed piece table.
//!
//! DESIGN
//! ======
//! Pieces live in a fixed 64-slot table keyed by `Square::index`, so lookup
//! during render is constant time and two pieces can never share a square.
//! `relocate` overwrites the destination slot, which is how captures happen.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use super::piece::{Piece, PieceColor, PieceKind};
use super::square::{BOARD_SIZE, Square};

/// A completed relocation, reported to move listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The pieces currently on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self { slots: [None; 64] }
    }

    /// Standard starting layout: black on rows 0-1, white on rows 6-7.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            let kind = BACK_RANK[usize::from(col)];
            board.place(0, col, Piece::new(kind, PieceColor::Black));
            board.place(1, col, Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.place(6, col, Piece::new(PieceKind::Pawn, PieceColor::White));
            board.place(7, col, Piece::new(kind, PieceColor::White));
        }
        board
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(square) = Square::new(row, col) {
            self.set(square, Some(piece));
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.slots[square.index()]
    }

    /// Put `piece` on `square`, returning whatever stood there.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.slots[square.index()], piece)
    }

    /// Move the piece on `from` to `to` with no legality check.
    ///
    /// Returns the captured piece, if any. Does nothing when `from` is empty
    /// or equal to `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let piece = self.slots[from.index()].take()?;
        self.set(to, Some(piece))
    }

    /// Occupied squares in render order.
    #[cfg(test)]
    pub(crate) fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    #[cfg(test)]
    pub(crate) fn piece_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}
