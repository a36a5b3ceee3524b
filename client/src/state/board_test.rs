use super::*;
use crate::chess::{PieceColor, PieceKind};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn board_state_starts_idle_with_full_board() {
    let state = BoardState::new();
    assert_eq!(state.selection, Selection::Idle);
    assert_eq!(state.selected(), None);
    assert_eq!(state.hovered, None);
    assert_eq!(state.board.piece_count(), 32);
}

#[test]
fn board_mode_default_is_pvp() {
    assert_eq!(BoardMode::default(), BoardMode::Pvp);
}

#[test]
fn board_mode_labels() {
    assert_eq!(BoardMode::Ai.label(), "🤖 vs Player");
    assert_eq!(BoardMode::Pvp.label(), "👥 Player vs Player");
}

// =============================================================
// Selection
// =============================================================

#[test]
fn activating_occupied_square_while_idle_selects_it() {
    let mut state = BoardState::new();
    assert_eq!(state.activate(sq(6, 4)), None);
    assert_eq!(state.selection, Selection::Selecting(sq(6, 4)));
}

#[test]
fn activating_empty_square_while_idle_is_noop() {
    let mut state = BoardState::new();
    assert_eq!(state.activate(sq(4, 4)), None);
    assert_eq!(state.selection, Selection::Idle);
    assert_eq!(state.board.piece_count(), 32);
}

// =============================================================
// Relocation
// =============================================================

#[test]
fn pawn_push_moves_piece_and_reports_move() {
    let mut state = BoardState::new();
    state.activate(sq(6, 4));
    let mv = state.activate(sq(4, 4));
    assert_eq!(mv, Some(Move { from: sq(6, 4), to: sq(4, 4) }));
    assert_eq!(state.piece_at(sq(6, 4)), None);
    assert_eq!(state.piece_at(sq(4, 4)), Some(Piece::new(PieceKind::Pawn, PieceColor::White)));
    assert_eq!(state.selection, Selection::Idle);
}

#[test]
fn moving_onto_occupied_square_captures() {
    let mut state = BoardState::new();
    state.activate(sq(7, 1));
    let mv = state.activate(sq(1, 1));
    assert_eq!(mv, Some(Move { from: sq(7, 1), to: sq(1, 1) }));
    assert_eq!(state.piece_at(sq(1, 1)), Some(Piece::new(PieceKind::Knight, PieceColor::White)));
    assert_eq!(state.board.piece_count(), 31);
}

#[test]
fn reselecting_same_square_cancels_without_move() {
    let mut state = BoardState::new();
    state.activate(sq(7, 4));
    assert_eq!(state.activate(sq(7, 4)), None);
    assert_eq!(state.selection, Selection::Idle);
    assert_eq!(state.board, Board::starting());
}

#[test]
fn any_piece_may_move_anywhere() {
    let mut state = BoardState::new();
    state.activate(sq(0, 4));
    let mv = state.activate(sq(5, 0));
    assert!(mv.is_some());
    assert_eq!(state.piece_at(sq(5, 0)), Some(Piece::new(PieceKind::King, PieceColor::Black)));
}

#[test]
fn gesture_can_repeat_after_returning_to_idle() {
    let mut state = BoardState::new();
    state.activate(sq(6, 4));
    state.activate(sq(4, 4));
    state.activate(sq(4, 4));
    let mv = state.activate(sq(3, 4));
    assert_eq!(mv, Some(Move { from: sq(4, 4), to: sq(3, 4) }));
}

#[test]
fn selection_on_cleared_square_ends_without_move() {
    let mut state = BoardState::new();
    state.selection = Selection::Selecting(sq(4, 4));
    assert_eq!(state.activate(sq(3, 3)), None);
    assert_eq!(state.selection, Selection::Idle);
}

// =============================================================
// Hover and classes
// =============================================================

#[test]
fn hover_enter_and_leave_track_square() {
    let mut state = BoardState::new();
    state.hover_enter(sq(2, 2));
    assert_eq!(state.hovered, Some(sq(2, 2)));
    state.hover_leave();
    assert_eq!(state.hovered, None);
}

#[test]
fn square_class_reflects_color_selection_and_hover() {
    let mut state = BoardState::new();
    assert_eq!(state.square_class(sq(0, 0)), "chess-square light");
    assert_eq!(state.square_class(sq(0, 1)), "chess-square dark");

    state.activate(sq(7, 4));
    state.hover_enter(sq(7, 4));
    assert_eq!(state.square_class(sq(7, 4)), "chess-square dark highlighted hovered");
}

#[test]
fn cancel_then_capture_then_idle_click() {
    let mut state = BoardState::new();
    state.activate(sq(7, 4));
    assert_eq!(state.activate(sq(7, 4)), None);
    assert_eq!(state.board, Board::starting());

    state.activate(sq(6, 4));
    assert_eq!(state.activate(sq(0, 3)), Some(Move { from: sq(6, 4), to: sq(0, 3) }));
    assert_eq!(state.board.piece_count(), 31);

    assert_eq!(state.activate(sq(5, 5)), None);
    assert_eq!(state.selection, Selection::Idle);
}
