//! Core value types for the free-placement board.

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// Lowercase color name as used in history records.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase kind name as used in history records.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A chess unit as it sits on a square: color, kind, and the Unicode glyph
/// it is rendered with.
///
/// Pieces are created only while building the starting layout and are never
/// edited afterwards; a move relocates the value from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
    pub symbol: char,
}

impl Piece {
    #[inline]
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            symbol: piece_to_unicode(color, kind),
        }
    }

    /// `"<color> <kind>"`, e.g. `"white pawn"`. History records store this
    /// form for both the moved and the replaced piece.
    #[inline]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.color.name(), self.kind.name())
    }
}

/// Unicode glyph for a piece of the given color and kind.
pub const fn piece_to_unicode(color: PieceColor, kind: PieceKind) -> char {
    match (color, kind) {
        (PieceColor::White, PieceKind::Pawn) => '♙',
        (PieceColor::White, PieceKind::Knight) => '♘',
        (PieceColor::White, PieceKind::Bishop) => '♗',
        (PieceColor::White, PieceKind::Rook) => '♖',
        (PieceColor::White, PieceKind::Queen) => '♕',
        (PieceColor::White, PieceKind::King) => '♔',
        (PieceColor::Black, PieceKind::Pawn) => '♟',
        (PieceColor::Black, PieceKind::Knight) => '♞',
        (PieceColor::Black, PieceKind::Bishop) => '♝',
        (PieceColor::Black, PieceKind::Rook) => '♜',
        (PieceColor::Black, PieceKind::Queen) => '♛',
        (PieceColor::Black, PieceKind::King) => '♚',
    }
}
