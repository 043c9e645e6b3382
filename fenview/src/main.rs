//! fenview - validate FEN strings and draw the positions they describe.
//!
//! FENs are taken from positional arguments, from `--file` (one per line), or
//! from stdin when neither is given. Each one is parsed with [`chess::parse`];
//! valid positions are drawn as a text board with their game state, invalid
//! ones print the parser's message. See [`config`] for environment tunables.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod input;
mod render;

use config::GlyphStyle;
use render::{JsonReport, TextOptions};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "fenview", about = "Validate FEN strings and display the positions")]
struct Cli {
    /// FEN strings to parse (quote each one).
    fens: Vec<String>,

    /// Read FEN strings from a file, one per line.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Also parse the sample FEN (`FENVIEW_DEFAULT_FEN`).
    #[arg(long)]
    sample: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Draw pieces with FEN letters instead of Unicode symbols.
    #[arg(long)]
    ascii: bool,

    /// Print only the game state, not the board.
    #[arg(long)]
    no_board: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] input::InputError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// At least one input was rejected; its message has already been printed.
    #[error("{failed} of {total} FEN strings were invalid")]
    InvalidFens { failed: usize, total: usize },
}

/// Outcome counts for one run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    total: usize,
    failed: usize,
}

impl Cli {
    fn glyph_style(&self) -> GlyphStyle {
        if self.ascii {
            GlyphStyle::Ascii
        } else {
            config::get_glyph_style()
        }
    }

    /// Inputs in the order given; stdin is read only when nothing else was.
    fn collect_fens(&self) -> Result<Vec<String>, CliError> {
        let mut fens = Vec::new();
        if self.sample {
            fens.push(config::get_sample_fen());
        }
        fens.extend(self.fens.iter().cloned());
        if let Some(path) = &self.file {
            fens.extend(input::read_file(path)?);
        }
        if fens.is_empty() && self.file.is_none() {
            tracing::debug!("No FEN arguments, reading stdin");
            fens = input::read_stdin()?;
        }
        Ok(fens)
    }
}

/// Parse and print each FEN, continuing past invalid ones.
fn run<W: Write>(cli: &Cli, fens: &[String], out: &mut W) -> Result<Summary, CliError> {
    let options = TextOptions {
        glyphs: cli.glyph_style(),
        show_board: !cli.no_board,
    };
    let mut summary = Summary::default();

    for (idx, fen) in fens.iter().enumerate() {
        let result = chess::parse(fen);
        summary.total += 1;
        if let Err(err) = &result {
            summary.failed += 1;
            tracing::info!(index = idx, error = %err, "Invalid FEN");
        }

        match cli.format {
            OutputFormat::Text => {
                if idx > 0 {
                    writeln!(out)?;
                }
                out.write_all(render::render_text(&result, options).as_bytes())?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &JsonReport::new(fen, &result))?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Install the tracing subscriber.
///
/// Logs go to stderr unless `FENVIEW_LOG_DIR` is set, in which case they are
/// written to a file there. The returned guard must be held until exit so the
/// non-blocking writer flushes.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match config::get_log_dir() {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::never(log_dir, config::LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true),
                )
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = init_logging();
    let cli = Cli::parse();
    tracing::debug!(?cli, "fenview starting");

    let fens = cli.collect_fens().context("collecting FEN input")?;
    let stdout = std::io::stdout();
    let summary = run(&cli, &fens, &mut stdout.lock())?;

    tracing::info!(total = summary.total, failed = summary.failed, "Done");
    if summary.failed > 0 {
        return Err(CliError::InvalidFens {
            failed: summary.failed,
            total: summary.total,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["fenview"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid arguments")
    }

    fn run_to_string(cli: &Cli, fens: &[&str]) -> (Summary, String) {
        let fens: Vec<String> = fens.iter().map(|f| f.to_string()).collect();
        let mut out = Vec::new();
        let summary = run(cli, &fens, &mut out).expect("run succeeds");
        (summary, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_text_output_for_valid_and_invalid() {
        let cli = cli(&["--ascii"]);
        let (summary, text) = run_to_string(
            &cli,
            &[chess::STANDARD_FEN, "8/8/8/8/8/8/8/8 w KQKQ - 0 1"],
        );

        assert_eq!(summary, Summary { total: 2, failed: 1 });
        assert!(text.contains("8  r n b q k b n r"));
        assert!(text.contains("FEN OK. Side to move: White"));
        assert!(text.contains("Castling: KQkq"));
        assert!(text.contains("Invalid FEN: Duplicate castling character 'K' in castling field."));
    }

    #[test]
    fn test_json_output_is_one_line_per_input() {
        let cli = cli(&["--format", "json"]);
        let (summary, text) = run_to_string(&cli, &["8/8/8/8/8/8/8/8 w - e3 0 1", ""]);

        assert_eq!(summary, Summary { total: 2, failed: 1 });
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ok"], true);
        assert_eq!(lines[1]["error"], "FEN string is empty");
    }

    #[test]
    fn test_no_board_flag() {
        let cli = cli(&["--no-board", "--ascii"]);
        let (_, text) = run_to_string(&cli, &[chess::STANDARD_FEN]);
        assert!(!text.contains("a b c d e f g h"));
        assert!(text.contains("Fullmove number: 1"));
    }

    #[test]
    fn test_collect_fens_from_args_and_file() {
        let tempdir = tempfile::tempdir().expect("failed to create temp dir");
        let path = tempdir.path().join("positions.fen");
        std::fs::write(&path, "8/8/8/8/8/8/8/8 b - - 0 1\n\n").unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let cli = cli(&["--sample", chess::STANDARD_FEN, "--file", path_arg.as_str()]);
        let fens = cli.collect_fens().unwrap();

        assert_eq!(fens.len(), 3);
        assert_eq!(fens[0], config::get_sample_fen());
        assert_eq!(fens[1], chess::STANDARD_FEN);
        assert_eq!(fens[2], "8/8/8/8/8/8/8/8 b - - 0 1");
    }

    #[test]
    fn test_empty_file_yields_no_inputs() {
        let tempdir = tempfile::tempdir().expect("failed to create temp dir");
        let path = tempdir.path().join("empty.fen");
        std::fs::write(&path, "").unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let cli = cli(&["--file", path_arg.as_str()]);
        assert!(cli.collect_fens().unwrap().is_empty());
    }

    #[test]
    fn test_ascii_flag_overrides_config() {
        assert_eq!(cli(&["--ascii"]).glyph_style(), GlyphStyle::Ascii);
    }
}
