//! Board view state: pieces, selection, and hover.
//!
//! DESIGN
//! ======
//! `BoardState` is owned by one `ChessBoard` instance and lives in a single
//! signal. Handlers mutate it synchronously; the only thing that leaves the
//! component is the `Move` returned from `activate`, which the caller forwards
//! to its `on_move` callback.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::chess::{Board, Move, Piece, Square};

/// Two-click gesture state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    /// A source square has been chosen; the next activation ends the gesture.
    Selecting(Square),
}

/// Which kind of game the board is showing. Display only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardMode {
    #[default]
    Pvp,
    Ai,
}

impl BoardMode {
    /// Overlay badge text shown in the board corner.
    pub fn label(self) -> &'static str {
        match self {
            BoardMode::Pvp => "\u{1F465} Player vs Player",
            BoardMode::Ai => "\u{1F916} vs Player",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub board: Board,
    pub selection: Selection,
    pub hovered: Option<Square>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn selected(&self) -> Option<Square> {
        match self.selection {
            Selection::Idle => None,
            Selection::Selecting(square) => Some(square),
        }
    }

    /// Handle a click on `square`.
    ///
    /// Idle: selects the square if a piece stands on it. Selecting: relocates
    /// the selected piece to `square` when they differ, then always returns
    /// to idle. Returns the move when a relocation happened.
    pub fn activate(&mut self, square: Square) -> Option<Move> {
        match self.selection {
            Selection::Idle => {
                if self.board.piece_at(square).is_some() {
                    self.selection = Selection::Selecting(square);
                }
                None
            }
            Selection::Selecting(from) => {
                self.selection = Selection::Idle;
                if from == square || self.board.piece_at(from).is_none() {
                    return None;
                }
                self.board.relocate(from, square);
                Some(Move { from, to: square })
            }
        }
    }

    pub fn hover_enter(&mut self, square: Square) {
        self.hovered = Some(square);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    /// CSS classes for one grid cell.
    pub fn square_class(&self, square: Square) -> String {
        let mut class = String::from("chess-square");
        class.push_str(if square.is_light() { " light" } else { " dark" });
        if self.selected() == Some(square) {
            class.push_str(" highlighted");
        }
        if self.hovered == Some(square) {
            class.push_str(" hovered");
        }
        class
    }
}
