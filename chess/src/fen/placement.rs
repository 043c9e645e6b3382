use crate::board::{rank_label, Board, BOARD_SIZE};
use crate::types::Piece;

use super::FenError;

/// Parse the piece placement field into a board.
///
/// Each rank is checked character by character so that an overflowing or
/// invalid token is reported where it occurs rather than as a rank total.
pub(super) fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        parse_rank(rank_str, row, &mut board)?;
    }

    Ok(board)
}

fn parse_rank(rank_str: &str, row: usize, board: &mut Board) -> Result<(), FenError> {
    let rank = rank_label(row);
    let mut file = 0usize;

    for c in rank_str.chars() {
        if c.is_ascii_digit() {
            let empties = (c as u8 - b'0') as usize;
            if !(1..=BOARD_SIZE).contains(&empties) {
                return Err(FenError::InvalidEmptyCount { digit: c, rank });
            }
            if file + empties > BOARD_SIZE {
                return Err(FenError::RankOverflow { rank, found: c });
            }
            // Board starts empty; nothing to write.
            file += empties;
        } else if let Some(piece) = Piece::from_fen_char(c) {
            if file >= BOARD_SIZE {
                return Err(FenError::RankOverflow { rank, found: c });
            }
            board.set(row, file, Some(piece));
            file += 1;
        } else {
            return Err(FenError::InvalidPlacementChar { found: c, rank });
        }
    }

    if file != BOARD_SIZE {
        return Err(FenError::IncompleteRank {
            rank,
            squares: file,
        });
    }

    Ok(())
}
