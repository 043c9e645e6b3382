//! Chess domain types and a validating FEN parser.

pub mod board;
pub mod fen;
pub mod types;

pub use board::{Board, SquareShade};
pub use fen::{
    parse, CastlingRight, CastlingRights, EnPassantRank, EnPassantSquare, FenError, FenField,
    Position, STANDARD_FEN,
};
pub use types::{Piece, PieceColor, PieceKind};
