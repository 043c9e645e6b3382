/// Why a FEN string was rejected.
///
/// Exactly one variant is produced per failed parse: the first problem found
/// in field order, then left to right within the field. Rank numbers are the
/// board labels 8..1, so the first rank written in the string is rank 8.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("FEN string is empty")]
    EmptyInput,

    #[error(
        "FEN must have 6 fields (piece placement, side to move, castling, en-passant, halfmove, fullmove). Found: {found}"
    )]
    WrongFieldCount { found: usize },

    #[error("Piece placement must contain 8 ranks separated by '/'. Found: {found}")]
    WrongRankCount { found: usize },

    #[error("Digit in rank must be between 1 and 8. Found '{digit}' in rank {rank}")]
    InvalidEmptyCount { digit: char, rank: usize },

    #[error("Too many squares in rank {rank} (at '{found}').")]
    RankOverflow { rank: usize, found: char },

    #[error(
        "Invalid character '{found}' in rank {rank} of piece placement (allowed: pnbrqkPNBRQK and digits 1-8)."
    )]
    InvalidPlacementChar { found: char, rank: usize },

    #[error("Rank {rank} does not have exactly 8 squares (has {squares}).")]
    IncompleteRank { rank: usize, squares: usize },

    #[error("Side-to-move field must be a single character 'w' or 'b'. Found: '{found}'")]
    SideToMoveWrongLength { found: String },

    #[error("Side-to-move must be 'w' or 'b'. Found: '{found}'")]
    SideToMoveInvalidChar { found: char },

    #[error(
        "Castling availability must be '-' or between 1 and 4 characters from [KQkq]. Found: '{found}'"
    )]
    CastlingLengthOutOfRange { found: String },

    #[error("Invalid castling character '{found}'. Allowed: K Q k q or '-'")]
    InvalidCastlingChar { found: char },

    #[error("Duplicate castling character '{found}' in castling field.")]
    DuplicateCastlingChar { found: char },

    #[error("En-passant field must be '-' or a square like 'e3' or 'd6'. Found: '{found}'")]
    EnPassantWrongLength { found: String },

    #[error("En-passant file must be between 'a' and 'h'. Found: '{found}'")]
    EnPassantInvalidFile { found: char },

    #[error(
        "En-passant rank must be '3' or '6' (square of pawn that could be captured). Found: '{found}'"
    )]
    EnPassantInvalidRank { found: char },

    #[error("Halfmove clock must be a non-negative integer (digits only). Found: '{found}'")]
    HalfmoveNotNumeric { found: String },

    #[error("Halfmove clock number too large: {found}")]
    HalfmoveOutOfRange { found: String },

    #[error("Fullmove number must be a positive integer. Found: '{found}'")]
    FullmoveNotNumeric { found: String },

    #[error("Fullmove number must be >= 1. Found: {found}")]
    FullmoveMustBePositive { found: u32 },

    #[error("Fullmove number too large: {found}")]
    FullmoveOutOfRange { found: String },
}

/// The FEN field a rejection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    /// The string as a whole (emptiness, field count).
    Record,
    Placement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

impl FenError {
    pub fn field(&self) -> FenField {
        match self {
            Self::EmptyInput | Self::WrongFieldCount { .. } => FenField::Record,
            Self::WrongRankCount { .. }
            | Self::InvalidEmptyCount { .. }
            | Self::RankOverflow { .. }
            | Self::InvalidPlacementChar { .. }
            | Self::IncompleteRank { .. } => FenField::Placement,
            Self::SideToMoveWrongLength { .. } | Self::SideToMoveInvalidChar { .. } => {
                FenField::SideToMove
            }
            Self::CastlingLengthOutOfRange { .. }
            | Self::InvalidCastlingChar { .. }
            | Self::DuplicateCastlingChar { .. } => FenField::Castling,
            Self::EnPassantWrongLength { .. }
            | Self::EnPassantInvalidFile { .. }
            | Self::EnPassantInvalidRank { .. } => FenField::EnPassant,
            Self::HalfmoveNotNumeric { .. } | Self::HalfmoveOutOfRange { .. } => {
                FenField::HalfmoveClock
            }
            Self::FullmoveNotNumeric { .. }
            | Self::FullmoveMustBePositive { .. }
            | Self::FullmoveOutOfRange { .. } => FenField::FullmoveNumber,
        }
    }
}
