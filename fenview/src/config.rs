//! Configuration for the fenview runtime.
//!
//! Every value has a compile-time default and can be overridden via a
//! dedicated environment variable. Command-line flags take precedence over
//! both.

use std::path::PathBuf;

/// FEN used by `--sample`: the start position with no castling rights.
pub const DEFAULT_SAMPLE_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 1 1";

/// Log file name under `FENVIEW_LOG_DIR`.
pub const LOG_FILE_NAME: &str = "fenview.log";

/// How pieces are drawn on the text board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Unicode chess symbols.
    Unicode,
    /// FEN letters.
    Ascii,
}

impl GlyphStyle {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unicode" => Some(Self::Unicode),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }
}

/// Get the glyph style for board rendering.
///
/// Priority:
/// 1. `FENVIEW_GLYPHS` env variable if set to `unicode` or `ascii`
///    (unrecognised values fall back to the default)
/// 2. Unicode as fallback
pub fn get_glyph_style() -> GlyphStyle {
    std::env::var("FENVIEW_GLYPHS")
        .ok()
        .and_then(|value| GlyphStyle::from_env_value(&value))
        .unwrap_or(GlyphStyle::Unicode)
}

/// Get the directory logs should be written to, if any.
///
/// When `FENVIEW_LOG_DIR` is unset, logs go to stderr.
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var_os("FENVIEW_LOG_DIR")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Get the FEN used by `--sample`.
///
/// Priority:
/// 1. `FENVIEW_DEFAULT_FEN` env variable if set
/// 2. [`DEFAULT_SAMPLE_FEN`] as fallback
pub fn get_sample_fen() -> String {
    std::env::var("FENVIEW_DEFAULT_FEN").unwrap_or_else(|_| DEFAULT_SAMPLE_FEN.to_string())
}
