//! Validating FEN parser.
//!
//! [`parse`] checks the six fields strictly left to right and stops at the
//! first problem, so a string is either accepted whole or rejected with a
//! single [`FenError`]. Only syntax is validated: a board with no kings or with
//! pawns on the back rank is accepted.

mod castling;
mod counters;
mod en_passant;
mod error;
mod placement;

use std::str::FromStr;

use serde::Serialize;

use crate::board::Board;
use crate::types::PieceColor;

pub use castling::{CastlingRight, CastlingRights};
pub use en_passant::{EnPassantRank, EnPassantSquare};
pub use error::{FenError, FenField};

/// The standard starting position.
pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A fully validated FEN record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub board: Board,
    pub side_to_move: PieceColor,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<EnPassantSquare>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Parse a FEN string into a [`Position`].
pub fn parse(fen: &str) -> Result<Position, FenError> {
    let result = parse_fields(fen);
    match &result {
        Ok(_) => tracing::trace!(fen, "FEN accepted"),
        Err(err) => tracing::debug!(fen, field = ?err.field(), error = %err, "FEN rejected"),
    }
    result
}

fn parse_fields(fen: &str) -> Result<Position, FenError> {
    let fen = fen.trim();
    if fen.is_empty() {
        return Err(FenError::EmptyInput);
    }

    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    };

    Ok(Position {
        board: placement::parse_placement(placement)?,
        side_to_move: parse_side_to_move(side)?,
        castling_rights: castling::parse_castling(castling)?,
        en_passant: en_passant::parse_en_passant(en_passant)?,
        halfmove_clock: counters::parse_halfmove(halfmove)?,
        fullmove_number: counters::parse_fullmove(fullmove)?,
    })
}

fn parse_side_to_move(field: &str) -> Result<PieceColor, FenError> {
    let mut chars = field.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(FenError::SideToMoveWrongLength {
            found: field.to_string(),
        });
    };
    match c {
        'w' => Ok(PieceColor::White),
        'b' => Ok(PieceColor::Black),
        _ => Err(FenError::SideToMoveInvalidChar { found: c }),
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Position {
    /// The standard starting position.
    pub fn starting() -> Self {
        Self {
            board: starting_board(),
            side_to_move: PieceColor::White,
            castling_rights: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

fn starting_board() -> Board {
    use crate::types::{Piece, PieceKind};

    const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    let mut board = Board::empty();
    for (file, kind) in BACK_RANK.into_iter().enumerate() {
        board.set(0, file, Some(Piece::new(kind, PieceColor::Black)));
        board.set(1, file, Some(Piece::new(PieceKind::Pawn, PieceColor::Black)));
        board.set(6, file, Some(Piece::new(PieceKind::Pawn, PieceColor::White)));
        board.set(7, file, Some(Piece::new(kind, PieceColor::White)));
    }
    board
}
