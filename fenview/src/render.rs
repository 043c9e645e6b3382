//! Text and JSON rendering of parse results.

use std::fmt;

use chess::board::{file_label, rank_label, BOARD_SIZE};
use chess::{FenError, Piece, PieceColor, PieceKind, Position, SquareShade};
use serde::Serialize;

use crate::config::GlyphStyle;

/// Options controlling the text output.
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub glyphs: GlyphStyle,
    pub show_board: bool,
}

/// Glyph drawn for a piece.
pub fn piece_glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Ascii => piece.to_fen_char(),
        GlyphStyle::Unicode => match (piece.color, piece.kind) {
            (PieceColor::White, PieceKind::King) => '\u{2654}',
            (PieceColor::White, PieceKind::Queen) => '\u{2655}',
            (PieceColor::White, PieceKind::Rook) => '\u{2656}',
            (PieceColor::White, PieceKind::Bishop) => '\u{2657}',
            (PieceColor::White, PieceKind::Knight) => '\u{2658}',
            (PieceColor::White, PieceKind::Pawn) => '\u{2659}',
            (PieceColor::Black, PieceKind::King) => '\u{265A}',
            (PieceColor::Black, PieceKind::Queen) => '\u{265B}',
            (PieceColor::Black, PieceKind::Rook) => '\u{265C}',
            (PieceColor::Black, PieceKind::Bishop) => '\u{265D}',
            (PieceColor::Black, PieceKind::Knight) => '\u{265E}',
            (PieceColor::Black, PieceKind::Pawn) => '\u{265F}',
        },
    }
}

fn empty_square(shade: SquareShade, style: GlyphStyle) -> char {
    match (shade, style) {
        (SquareShade::Light, _) => ' ',
        (SquareShade::Dark, GlyphStyle::Unicode) => '\u{2591}',
        (SquareShade::Dark, GlyphStyle::Ascii) => '.',
    }
}

/// Board with rank labels on the left and file labels below.
struct BoardView<'a> {
    position: &'a Position,
    style: GlyphStyle,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.position.board.rows().enumerate() {
            write!(f, "{} ", rank_label(row))?;
            for (file, square) in rank.iter().enumerate() {
                let glyph = match square {
                    Some(piece) => piece_glyph(*piece, self.style),
                    None => empty_square(SquareShade::of(row, file), self.style),
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..BOARD_SIZE {
            write!(f, " {}", file_label(file))?;
        }
        writeln!(f)
    }
}

pub fn render_board(position: &Position, style: GlyphStyle) -> String {
    BoardView { position, style }.to_string()
}

/// Status line plus one line per non-board field.
pub fn render_info(position: &Position) -> String {
    let castling = if position.castling_rights.is_empty() {
        "None".to_string()
    } else {
        position.castling_rights.to_string()
    };
    let en_passant = position
        .en_passant
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "None".to_string());
    let side = position.side_to_move.name();

    format!(
        "FEN OK. Side to move: {side}\n\
         Side to move: {side}\n\
         Castling: {castling}\n\
         En-passant: {en_passant}\n\
         Halfmove clock: {}\n\
         Fullmove number: {}\n",
        position.halfmove_clock, position.fullmove_number,
    )
}

pub fn render_error(err: &FenError) -> String {
    format!("Invalid FEN: {err}\n")
}

pub fn render_text(result: &Result<Position, FenError>, options: TextOptions) -> String {
    match result {
        Ok(position) if options.show_board => {
            format!(
                "{}\n{}",
                render_board(position, options.glyphs),
                render_info(position)
            )
        }
        Ok(position) => render_info(position),
        Err(err) => render_error(err),
    }
}

/// One JSON line per input.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub fen: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'a Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> JsonReport<'a> {
    pub fn new(fen: &'a str, result: &'a Result<Position, FenError>) -> Self {
        match result {
            Ok(position) => Self {
                fen,
                ok: true,
                position: Some(position),
                error: None,
            },
            Err(err) => Self {
                fen,
                ok: false,
                position: None,
                error: Some(err.to_string()),
            },
        }
    }
}
