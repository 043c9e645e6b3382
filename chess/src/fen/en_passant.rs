use std::fmt;

use cozy_chess::{File, Rank, Square};
use serde::Serialize;

use crate::board::file_label;

use super::FenError;

/// The only ranks a double-step en-passant target can sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnPassantRank {
    Third,
    Sixth,
}

/// En-passant target square, e.g. `e3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct EnPassantSquare {
    file: u8,
    rank: EnPassantRank,
}

impl EnPassantRank {
    /// Board rank number, 3 or 6.
    pub fn number(self) -> u8 {
        match self {
            Self::Third => 3,
            Self::Sixth => 6,
        }
    }
}

impl EnPassantSquare {
    /// `file` is 0 for the a-file; returns `None` past the h-file.
    pub fn new(file: u8, rank: EnPassantRank) -> Option<Self> {
        (file < 8).then_some(Self { file, rank })
    }

    /// File index, 0 = a-file.
    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn file_char(&self) -> char {
        file_label(self.file as usize)
    }

    pub fn rank(&self) -> EnPassantRank {
        self.rank
    }

    /// Row in [`crate::board::Board`] coordinates (row 0 is rank 8).
    pub fn row(&self) -> usize {
        8 - self.rank.number() as usize
    }
}

impl fmt::Display for EnPassantSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank.number())
    }
}

impl From<EnPassantSquare> for String {
    fn from(square: EnPassantSquare) -> Self {
        square.to_string()
    }
}

impl From<EnPassantSquare> for Square {
    fn from(square: EnPassantSquare) -> Self {
        let rank = match square.rank {
            EnPassantRank::Third => Rank::Third,
            EnPassantRank::Sixth => Rank::Sixth,
        };
        Square::new(File::index(square.file as usize), rank)
    }
}

pub(super) fn parse_en_passant(field: &str) -> Result<Option<EnPassantSquare>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let mut chars = field.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(FenError::EnPassantWrongLength {
            found: field.to_string(),
        });
    };

    if !('a'..='h').contains(&file) {
        return Err(FenError::EnPassantInvalidFile { found: file });
    }
    let rank = match rank {
        '3' => EnPassantRank::Third,
        '6' => EnPassantRank::Sixth,
        _ => return Err(FenError::EnPassantInvalidRank { found: rank }),
    };

    Ok(Some(EnPassantSquare {
        file: file as u8 - b'a',
        rank,
    }))
}
