//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board and app chrome. Board state is local to
//! `ChessBoard`; chrome reads the theme from the Leptos context provider.

pub mod chess_board;
pub mod chess_piece;
pub mod feature_card;
pub mod navigation;
pub mod rank_badge;
