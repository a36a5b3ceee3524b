use std::collections::HashSet;

use super::*;

#[test]
fn glyph_matches_unicode_chess_symbols() {
    assert_eq!(glyph(PieceKind::King, PieceColor::White), '♔');
    assert_eq!(glyph(PieceKind::Queen, PieceColor::White), '♕');
    assert_eq!(glyph(PieceKind::Pawn, PieceColor::White), '♙');
    assert_eq!(glyph(PieceKind::King, PieceColor::Black), '♚');
    assert_eq!(glyph(PieceKind::Knight, PieceColor::Black), '♞');
    assert_eq!(glyph(PieceKind::Pawn, PieceColor::Black), '♟');
}

#[test]
fn every_kind_and_color_has_a_distinct_glyph() {
    let mut seen = HashSet::new();
    for color in PieceColor::ALL {
        for kind in PieceKind::ALL {
            assert!(seen.insert(glyph(kind, color)), "duplicate glyph for {kind:?} {color:?}");
        }
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn piece_glyph_delegates_to_catalog() {
    let rook = Piece::new(PieceKind::Rook, PieceColor::Black);
    assert_eq!(rook.glyph(), '♜');
}

#[test]
fn names_are_lowercase() {
    assert_eq!(PieceKind::Bishop.name(), "bishop");
    assert_eq!(PieceColor::White.name(), "white");
}
