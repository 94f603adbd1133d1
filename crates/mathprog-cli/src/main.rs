//! mpscan - token inspector for MathProg model sources.
//!
//! This is the main entry point for the mpscan CLI application.
//! It reads a model file (or standard input), walks it the way an
//! embedding host would drive the supplementary scanner, and prints
//! every token the scanner commits along with its position.

mod error;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{MpscanError, Result};
use mathprog_scan::{Scanner, SourceCursor, TokenKind, TokenSet};

/// mpscan - Token inspector for MathProg model sources
///
/// Walks a model source with the supplementary scanner and lists the
/// string literals, numeric literals, and name boundaries it commits.
#[derive(Parser, Debug)]
#[command(name = "mpscan")]
#[command(author = "MathProg Tooling Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token inspector for MathProg model sources", long_about = None)]
struct Cli {
    /// Model file to scan; `-` or no argument reads standard input
    input: Option<PathBuf>,

    /// Comma-separated token kinds to request: string, number, end-of-token
    #[arg(short, long, default_value = "string,number")]
    kinds: String,

    /// Emit one JSON object per token instead of the text listing
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, env = "MPSCAN_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "MPSCAN_NO_COLOR")]
    no_color: bool,
}

/// One committed token with its absolute position in the source.
#[derive(Debug, Serialize)]
struct ScannedToken<'a> {
    kind: &'static str,
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Byte offset plus 1-based line and column, tracked by the driver as
/// it walks the source.
#[derive(Debug, Clone, Copy)]
struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

impl Position {
    fn start() -> Self {
        Self { offset: 0, line: 1, column: 1 }
    }

    fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Main entry point for the mpscan CLI.
///
/// Parses command-line arguments, initializes logging, reads the input
/// source, and runs the scan loop over it.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let requested = parse_kinds(&cli.kinds)?;
    let source = read_input(cli.input.as_deref())?;
    tracing::debug!("read {} bytes of model source", source.len());

    let tokens = scan_source(&source, requested);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &tokens, cli.json)?;

    tracing::info!("scanned {} tokens from {} bytes", tokens.len(), source.len());
    Ok(())
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Diagnostics go to stderr; stdout is reserved for the listing.
    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MpscanError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Parse the `--kinds` flag into a requested-kind set.
fn parse_kinds(spec: &str) -> Result<TokenSet> {
    let mut requested = TokenSet::EMPTY;
    for name in spec.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let kind = TokenKind::from_name(name)
            .ok_or_else(|| MpscanError::UnknownKind(name.to_string()))?;
        requested = requested.with(kind);
    }
    if requested.is_empty() {
        return Err(MpscanError::Validation("no token kinds requested".to_string()));
    }
    Ok(requested)
}

/// Read the model source from a file or standard input.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| MpscanError::FileOperation(format!("{}: {}", path.display(), e))),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        },
    }
}

/// Walk `source` the way an embedding host would and collect every
/// committed token.
///
/// Each round places a fresh cursor at the current offset and asks the
/// scanner for one token. On success the walk resumes at the committed
/// end; a zero-width success steps one code point so the loop makes
/// progress. On failure the walk steps one code point, except over the
/// `..` range operator, which is stepped whole so its second dot is not
/// re-scanned as the start of a fraction.
fn scan_source(source: &str, requested: TokenSet) -> Vec<ScannedToken<'_>> {
    let scanner = Scanner::new();
    let mut tokens = Vec::new();
    let mut base = Position::start();

    while base.offset < source.len() {
        let rest = &source[base.offset..];
        let mut cursor = SourceCursor::new(rest);
        let step = rest.chars().next().map_or(1, char::len_utf8);
        match scanner.scan(&mut cursor, requested) {
            Some(kind) => {
                base.advance_over(&rest[..cursor.token_start()]);
                let (line, column, start) = (base.line, base.column, base.offset);
                let text = cursor.token_text();
                base.advance_over(text);
                tokens.push(ScannedToken {
                    kind: kind.name(),
                    line,
                    column,
                    start,
                    end: base.offset,
                    text,
                });
                if cursor.token_end() == 0 {
                    base.advance_over(&rest[..step]);
                }
            },
            None => {
                let skip = if rest.starts_with("..") { 2 } else { step };
                base.advance_over(&rest[..skip]);
            },
        }
    }

    tokens
}

/// Write the token listing, one line per token.
fn write_tokens<W: Write>(out: &mut W, tokens: &[ScannedToken<'_>], json: bool) -> Result<()> {
    for token in tokens {
        if json {
            serde_json::to_writer(&mut *out, token)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}:{}\t{}\t{}", token.line, token.column, token.kind, token.text)?;
        }
    }
    Ok(())
}
