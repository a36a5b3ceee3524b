//! Interactive 8x8 board.
//!
//! ARCHITECTURE
//! ============
//! The component owns a `RwSignal<BoardState>` created on mount, so every
//! remount starts from the standard layout. Clicks run the two-click gesture
//! in `BoardState::activate`; a completed relocation is forwarded to the
//! optional `on_move` callback as `(from, to)`.

use leptos::prelude::*;

use crate::chess::Square;
use crate::components::chess_piece::ChessPiece;
use crate::state::board::{BoardMode, BoardState};

/// Chess board with click-to-move and hover highlighting.
///
/// No rules are enforced: any piece can be dropped on any square.
#[component]
pub fn ChessBoard(
    game_mode: BoardMode,
    #[prop(optional)] on_move: Option<Callback<(Square, Square)>>,
) -> impl IntoView {
    let state = RwSignal::new(BoardState::new());

    let squares = Square::all()
        .map(|sq| {
            let on_click = move |_| {
                let moved = state.try_update(|s| s.activate(sq)).flatten();
                if let (Some(mv), Some(on_move)) = (moved, on_move) {
                    on_move.run((mv.from, mv.to));
                }
            };
            let on_enter = move |_| state.update(|s| s.hover_enter(sq));
            let on_leave = move |_| state.update(|s| s.hover_leave());

            view! {
                <div
                    class=move || state.with(|s| s.square_class(sq))
                    data-square=sq.to_string()
                    on:click=on_click
                    on:mouseenter=on_enter
                    on:mouseleave=on_leave
                >
                    {move || {
                        let (piece, selected) =
                            state.with(|s| (s.piece_at(sq), s.selected() == Some(sq)));
                        piece.map(|piece| view! { <ChessPiece piece=piece selected=selected/> })
                    }}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chess-board">
            <div class="chess-board__frame">
                <div class="chess-board__grid">{squares}</div>
            </div>
            <div class="chess-board__mode">{game_mode.label()}</div>
        </div>
    }
}
