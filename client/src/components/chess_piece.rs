//! Single piece glyph.

#[cfg(test)]
#[path = "chess_piece_test.rs"]
mod chess_piece_test;

use leptos::prelude::*;

use crate::chess::Piece;

pub fn piece_class(piece: Piece, selected: bool) -> String {
    let mut class = format!("chess-piece chess-piece--{}", piece.color.name());
    if selected {
        class.push_str(" chess-piece--selected");
    }
    class
}

/// Glyph for `piece`, enlarged while its square is selected.
#[component]
pub fn ChessPiece(piece: Piece, #[prop(optional)] selected: bool) -> impl IntoView {
    let title = format!("{} {}", piece.color.name(), piece.kind.name());
    view! {
        <div class=piece_class(piece, selected) title=title>
            {piece.glyph().to_string()}
        </div>
    }
}
