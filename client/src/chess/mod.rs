//! Chess board domain model.
//!
//! DESIGN
//! ======
//! Pure data types with no Leptos dependency: squares, the piece catalog and
//! the square-indexed board table. Components wrap these in signals; nothing
//! here knows about rendering or the browser.
//!
//! There is no rules engine. A relocation moves any piece to any square and
//! drops whatever stood there.

pub mod board;
pub mod piece;
pub mod square;

pub use board::{Board, Move};
pub use piece::{Piece, PieceColor, PieceKind};
pub use square::Square;
