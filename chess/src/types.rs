//! Canonical piece and color types for the project.
//! cozy-chess types are an interop target, not part of the parsed model.

use serde::Serialize;

/// Project-owned piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Project-owned color type. Doubles as the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    /// Case-insensitive lookup of a FEN piece letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }
}

impl PieceColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Capitalised name, as shown to users.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Parse one of `pnbrqkPNBRQK`. Uppercase is White.
    ///
    /// Non-ASCII letters are rejected even if they lowercase to a piece letter.
    pub fn from_fen_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self { kind, color })
    }

    pub fn to_fen_char(self) -> char {
        match self.color {
            PieceColor::White => self.kind.to_char_upper(),
            PieceColor::Black => self.kind.to_char_lower(),
        }
    }
}

/// Handing a parsed piece to the move-generation stack.
impl From<PieceKind> for cozy_chess::Piece {
    fn from(kind: PieceKind) -> Self {
        use cozy_chess::Piece as Cozy;
        match kind {
            PieceKind::Pawn => Cozy::Pawn,
            PieceKind::Knight => Cozy::Knight,
            PieceKind::Bishop => Cozy::Bishop,
            PieceKind::Rook => Cozy::Rook,
            PieceKind::Queen => Cozy::Queen,
            PieceKind::King => Cozy::King,
        }
    }
}

impl From<PieceColor> for cozy_chess::Color {
    fn from(color: PieceColor) -> Self {
        match color {
            PieceColor::White => cozy_chess::Color::White,
            PieceColor::Black => cozy_chess::Color::Black,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
