//! Board grid produced by the FEN placement field.

use serde::Serialize;

use crate::types::Piece;

/// Number of ranks and files on a board.
pub const BOARD_SIZE: usize = 8;

/// An 8x8 grid of squares in FEN reading order.
///
/// Row 0 is rank 8 (the first rank written in a FEN string), file 0 is the
/// a-file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Display shade of a square; the top-left square is light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Piece on `row` (0 = rank 8) and `file` (0 = a-file), `None` when empty
    /// or out of bounds.
    pub fn piece_at(&self, row: usize, file: usize) -> Option<Piece> {
        self.squares.get(row)?.get(file).copied().flatten()
    }

    pub fn row(&self, row: usize) -> Option<&[Option<Piece>; BOARD_SIZE]> {
        self.squares.get(row)
    }

    /// Rows top to bottom, rank 8 first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; BOARD_SIZE]> {
        self.squares.iter()
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    /// Occupied squares in cozy-chess terms, for handing the placement to a
    /// move generator.
    pub fn cozy_pieces(
        &self,
    ) -> impl Iterator<Item = (cozy_chess::Square, cozy_chess::Piece, cozy_chess::Color)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(file, square)| {
                let piece = (*square)?;
                let sq = cozy_chess::Square::new(
                    cozy_chess::File::index(file),
                    cozy_chess::Rank::index(BOARD_SIZE - 1 - row),
                );
                Some((sq, piece.kind.into(), piece.color.into()))
            })
        })
    }

    pub(crate) fn set(&mut self, row: usize, file: usize, piece: Option<Piece>) {
        self.squares[row][file] = piece;
    }
}

impl SquareShade {
    pub fn of(row: usize, file: usize) -> Self {
        if (row + file) % 2 == 0 {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Human rank label for a row index: row 0 is rank 8.
pub fn rank_label(row: usize) -> usize {
    BOARD_SIZE - row
}

/// Letter for a file index: 0 is `a`.
pub fn file_label(file: usize) -> char {
    (b'a' + file as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceColor, PieceKind};

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        for row in 0..8 {
            for file in 0..8 {
                assert_eq!(board.piece_at(row, file), None);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_piece_at_out_of_bounds_is_none() {
        let mut board = Board::empty();
        board.set(7, 7, Some(Piece::new(PieceKind::Rook, PieceColor::White)));
        assert!(board.piece_at(7, 7).is_some());
        assert_eq!(board.piece_at(8, 0), None);
        assert_eq!(board.piece_at(0, 8), None);
    }

    #[test]
    fn test_cozy_pieces_use_board_ranks() {
        use cozy_chess::{Color, File, Piece as CozyPiece, Rank, Square};

        let mut board = Board::empty();
        board.set(0, 4, Some(Piece::new(PieceKind::King, PieceColor::Black)));
        board.set(6, 0, Some(Piece::new(PieceKind::Pawn, PieceColor::White)));

        let pieces: Vec<_> = board.cozy_pieces().collect();
        assert_eq!(
            pieces,
            vec![
                (Square::new(File::E, Rank::Eighth), CozyPiece::King, Color::Black),
                (Square::new(File::A, Rank::Second), CozyPiece::Pawn, Color::White),
            ]
        );
    }

    #[test]
    fn test_square_shade_top_left_is_light() {
        assert_eq!(SquareShade::of(0, 0), SquareShade::Light);
        assert_eq!(SquareShade::of(0, 1), SquareShade::Dark);
        assert_eq!(SquareShade::of(7, 7), SquareShade::Light);
        assert_eq!(SquareShade::of(7, 0), SquareShade::Dark);
    }

    #[test]
    fn test_labels() {
        assert_eq!(rank_label(0), 8);
        assert_eq!(rank_label(7), 1);
        assert_eq!(file_label(0), 'a');
        assert_eq!(file_label(7), 'h');
    }
}
