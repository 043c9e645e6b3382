//! Property tests for the FEN parser.

use chess::{
    parse, CastlingRight, CastlingRights, EnPassantRank, EnPassantSquare, FenError, Piece,
    Position,
};
use proptest::prelude::*;

const PIECE_CHARS: &[char] = &['p', 'n', 'b', 'r', 'q', 'k', 'P', 'N', 'B', 'R', 'Q', 'K'];

fn square() -> impl Strategy<Value = Option<char>> {
    prop_oneof![
        3 => Just(None),
        2 => proptest::sample::select(PIECE_CHARS).prop_map(Some),
    ]
}

fn grid() -> impl Strategy<Value = Vec<Vec<Option<char>>>> {
    proptest::collection::vec(proptest::collection::vec(square(), 8), 8)
}

fn castling() -> impl Strategy<Value = Vec<CastlingRight>> {
    proptest::sample::subsequence(CastlingRight::ALL.to_vec(), 0..=4)
}

fn en_passant() -> impl Strategy<Value = Option<EnPassantSquare>> {
    proptest::option::of(
        (0u8..8, prop_oneof![Just(EnPassantRank::Third), Just(EnPassantRank::Sixth)])
            .prop_map(|(file, rank)| EnPassantSquare::new(file, rank))
            .prop_filter_map("file in range", |sq| sq),
    )
}

/// Canonical placement: empty runs collapsed into a single digit.
fn placement(grid: &[Vec<Option<char>>]) -> String {
    let ranks: Vec<String> = grid
        .iter()
        .map(|rank| {
            let mut out = String::new();
            let mut empties = 0;
            for square in rank {
                match square {
                    Some(c) => {
                        if empties > 0 {
                            out.push_str(&empties.to_string());
                            empties = 0;
                        }
                        out.push(*c);
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
            out
        })
        .collect();
    ranks.join("/")
}

fn castling_field(rights: &[CastlingRight]) -> String {
    if rights.is_empty() {
        "-".to_string()
    } else {
        rights.iter().map(|r| r.to_char()).collect()
    }
}

fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/-]{1,10}"
}

proptest! {
    #[test]
    fn hand_built_fen_round_trips(
        grid in grid(),
        white in any::<bool>(),
        rights in castling(),
        ep in en_passant(),
        halfmove in 0u32..1000,
        fullmove in 1u32..10_000,
    ) {
        let fen = format!(
            "{} {} {} {} {} {}",
            placement(&grid),
            if white { "w" } else { "b" },
            castling_field(&rights),
            ep.map(|sq| sq.to_string()).unwrap_or_else(|| "-".to_string()),
            halfmove,
            fullmove,
        );

        let position = parse(&fen).unwrap();

        for (row, rank) in grid.iter().enumerate() {
            for (file, square) in rank.iter().enumerate() {
                let expected = square.and_then(Piece::from_fen_char);
                prop_assert_eq!(position.board.piece_at(row, file), expected);
            }
        }
        let expected_rights: CastlingRights = rights.iter().copied().collect();
        prop_assert_eq!(position.castling_rights, expected_rights);
        prop_assert_eq!(position.en_passant, ep);
        prop_assert_eq!(position.halfmove_clock, halfmove);
        prop_assert_eq!(position.fullmove_number, fullmove);

        // Rebuilding the string from the parsed value yields the same position.
        let rebuilt = format!(
            "{} {} {} {} {} {}",
            placement(&grid),
            if white { "w" } else { "b" },
            position.castling_rights,
            position.en_passant.map(|sq| sq.to_string()).unwrap_or_else(|| "-".to_string()),
            position.halfmove_clock,
            position.fullmove_number,
        );
        prop_assert_eq!(parse(&rebuilt), Ok(position));
    }

    #[test]
    fn wrong_token_count_is_rejected(
        tokens in proptest::collection::vec(token(), 0..12)
            .prop_filter("not six tokens", |t| t.len() != 6)
    ) {
        let fen = tokens.join(" ");
        let expected = if tokens.is_empty() {
            FenError::EmptyInput
        } else {
            FenError::WrongFieldCount { found: tokens.len() }
        };
        prop_assert_eq!(parse(&fen), Err(expected));
    }

    #[test]
    fn parsing_is_idempotent(input in "\\PC{0,80}") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn arbitrary_six_field_input_never_panics(
        tokens in proptest::collection::vec("\\PC{1,12}", 6)
    ) {
        let fen = tokens.join(" ");
        let _: Result<Position, FenError> = parse(&fen);
    }
}
