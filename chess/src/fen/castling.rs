use std::fmt;

use serde::Serialize;

use super::FenError;

/// One of the four castling permissions a FEN string can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingRight {
    pub const ALL: [CastlingRight; 4] = [
        Self::WhiteKingside,
        Self::WhiteQueenside,
        Self::BlackKingside,
        Self::BlackQueenside,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(Self::WhiteKingside),
            'Q' => Some(Self::WhiteQueenside),
            'k' => Some(Self::BlackKingside),
            'q' => Some(Self::BlackQueenside),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::WhiteKingside => 'K',
            Self::WhiteQueenside => 'Q',
            Self::BlackKingside => 'k',
            Self::BlackQueenside => 'q',
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of castling rights; order-insensitive, at most four members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CastlingRight::ALL.into_iter().collect()
    }

    pub fn contains(&self, right: CastlingRight) -> bool {
        self.0 & right.bit() != 0
    }

    /// Adds `right`, returning `false` if it was already present.
    pub fn insert(&mut self, right: CastlingRight) -> bool {
        let fresh = !self.contains(right);
        self.0 |= right.bit();
        fresh
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in `KQkq` order.
    pub fn iter(&self) -> impl Iterator<Item = CastlingRight> + '_ {
        CastlingRight::ALL
            .into_iter()
            .filter(move |right| self.contains(*right))
    }
}

impl FromIterator<CastlingRight> for CastlingRights {
    fn from_iter<I: IntoIterator<Item = CastlingRight>>(iter: I) -> Self {
        let mut rights = Self::none();
        for right in iter {
            rights.insert(right);
        }
        rights
    }
}

/// Canonical form: `KQkq` order, `-` when empty.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for right in self.iter() {
            write!(f, "{}", right.to_char())?;
        }
        Ok(())
    }
}

impl From<CastlingRights> for String {
    fn from(rights: CastlingRights) -> Self {
        rights.to_string()
    }
}

pub(super) fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }

    let len = field.chars().count();
    if !(1..=4).contains(&len) {
        return Err(FenError::CastlingLengthOutOfRange {
            found: field.to_string(),
        });
    }

    let mut rights = CastlingRights::none();
    for c in field.chars() {
        let right =
            CastlingRight::from_char(c).ok_or(FenError::InvalidCastlingChar { found: c })?;
        if !rights.insert(right) {
            return Err(FenError::DuplicateCastlingChar { found: c });
        }
    }

    Ok(rights)
}
