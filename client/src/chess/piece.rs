//! Piece kinds, colors, and the glyph catalog.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

/// Chess piece types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Side a piece belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

/// A piece as stored in the board table. Its square is the slot it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    pub fn glyph(self) -> char {
        glyph(self.kind, self.color)
    }
}

/// Unicode glyph for a piece. White uses the outlined set, black the filled one.
pub fn glyph(kind: PieceKind, color: PieceColor) -> char {
    match (color, kind) {
        (PieceColor::White, PieceKind::King) => '\u{2654}',
        (PieceColor::White, PieceKind::Queen) => '\u{2655}',
        (PieceColor::White, PieceKind::Rook) => '\u{2656}',
        (PieceColor::White, PieceKind::Bishop) => '\u{2657}',
        (PieceColor::White, PieceKind::Knight) => '\u{2658}',
        (PieceColor::White, PieceKind::Pawn) => '\u{2659}',
        (PieceColor::Black, PieceKind::King) => '\u{265A}',
        (PieceColor::Black, PieceKind::Queen) => '\u{265B}',
        (PieceColor::Black, PieceKind::Rook) => '\u{265C}',
        (PieceColor::Black, PieceKind::Bishop) => '\u{265D}',
        (PieceColor::Black, PieceKind::Knight) => '\u{265E}',
        (PieceColor::Black, PieceKind::Pawn) => '\u{265F}',
    }
}
