//! Gathering FEN strings from the command line, a file, or stdin.

use std::io::BufRead;
use std::path::Path;

/// Errors raised while collecting input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read FEN file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read FENs from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Read one FEN per line, skipping blank lines.
///
/// Lines are kept as written; trimming is left to the parser.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut fens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            fens.push(line);
        }
    }
    Ok(fens)
}

pub fn read_file(path: &Path) -> Result<Vec<String>, InputError> {
    let file = std::fs::File::open(path).map_err(|source| InputError::File {
        path: path.display().to_string(),
        source,
    })?;
    read_lines(std::io::BufReader::new(file)).map_err(|source| InputError::File {
        path: path.display().to_string(),
        source,
    })
}

pub fn read_stdin() -> Result<Vec<String>, InputError> {
    read_lines(std::io::stdin().lock()).map_err(InputError::Stdin)
}
