//! CLI binary for edgequake-md2tts.
//!
//! A thin shim over the library crate: reads Markdown from a file or stdin,
//! maps CLI flags to `StripConfig` and prints the speakable text.
//!
//! With no arguments it behaves as a filter: `cat notes.md | md2tts | say`.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_md2tts::{
    strip_file, strip_to_file, write_output, BracketCleanup, StripConfig, StripOutput, StripStats,
    Stripper, SymbolFilter,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

// ── CLI definition ───────────────────────────────────────────────────────────

/// Convert Markdown to plain text for text-to-speech.
#[derive(Parser, Debug)]
#[command(name = "md2tts", version, about, long_about = None)]
struct Cli {
    /// Markdown file to convert. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Write the text to this file instead of stdout.
    #[arg(short, long, env = "MD2TTS_OUTPUT")]
    output: Option<PathBuf>,

    /// Symbol policy: `category` removes every Other Symbol, `denylist` only status marks.
    #[arg(long, env = "MD2TTS_SYMBOLS", value_enum, default_value = "category")]
    symbols: SymbolArg,

    /// Bracket cleanup: `empty-pairs` removes `[]`/`()`, `all` removes every bracket.
    #[arg(long, env = "MD2TTS_BRACKETS", value_enum, default_value = "empty-pairs")]
    brackets: BracketArg,

    /// Leave HTML entities such as `&amp;` undecoded.
    #[arg(long, env = "MD2TTS_NO_ENTITIES")]
    no_entities: bool,

    /// Treat `~~text~~` literally instead of as strikethrough.
    #[arg(long, env = "MD2TTS_NO_STRIKETHROUGH")]
    no_strikethrough: bool,

    /// Output structured JSON (text + stats) instead of plain text.
    #[arg(long, env = "MD2TTS_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2TTS_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2TTS_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum SymbolArg {
    Category,
    Denylist,
}

impl From<SymbolArg> for SymbolFilter {
    fn from(v: SymbolArg) -> Self {
        match v {
            SymbolArg::Category => SymbolFilter::UnicodeCategory,
            SymbolArg::Denylist => SymbolFilter::Denylist,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum BracketArg {
    EmptyPairs,
    All,
}

impl From<BracketArg> for BracketCleanup {
    fn from(v: BracketArg) -> Self {
        match v {
            BracketArg::EmptyPairs => BracketCleanup::EmptyPairs,
            BracketArg::All => BracketCleanup::All,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Logs go to stderr; stdout carries only the converted text.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli);
    debug!(?config, "Resolved configuration");

    let input_file = cli.input.as_deref().filter(|p| *p != Path::new("-"));

    // ── File to file ─────────────────────────────────────────────────────
    if let (Some(input), Some(output_path), false) = (input_file, cli.output.as_ref(), cli.json) {
        let stats = strip_to_file(input, output_path, &config).context("Conversion failed")?;
        print_summary(&cli, &stats, output_path);
        return Ok(());
    }

    // ── Everything else: convert in memory ───────────────────────────────
    let output = match input_file {
        Some(path) => strip_file(path, &config).context("Conversion failed")?,
        None => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read Markdown from stdin")?;
            Stripper::new(config).strip_with_stats(&markdown)
        }
    };

    let rendered = render_output(&cli, &output)?;

    if let Some(ref output_path) = cli.output {
        write_output(output_path, &rendered).context("Failed to write output")?;
        print_summary(&cli, &output.stats, output_path);
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Map CLI args to `StripConfig`.
fn build_config(cli: &Cli) -> StripConfig {
    StripConfig::builder()
        .symbol_filter(cli.symbols.clone().into())
        .bracket_cleanup(cli.brackets.clone().into())
        .decode_entities(!cli.no_entities)
        .strikethrough(!cli.no_strikethrough)
        .build()
}

/// Plain text plus trailing newline, or pretty JSON.
fn render_output(cli: &Cli, output: &StripOutput) -> Result<String> {
    if cli.json {
        let json = serde_json::to_string_pretty(output).context("Failed to serialise output")?;
        Ok(format!("{json}\n"))
    } else {
        Ok(format!("{}\n", output.text))
    }
}

fn print_summary(cli: &Cli, stats: &StripStats, output_path: &Path) {
    if cli.quiet {
        return;
    }
    eprintln!(
        "{}  {} → {} bytes  →  {}",
        green("✔"),
        stats.input_bytes,
        stats.output_bytes,
        output_path.display(),
    );
    eprintln!(
        "   {} urls  /  {} paths  /  {} table rows removed",
        dim(&stats.urls_removed.to_string()),
        dim(&stats.paths_removed.to_string()),
        dim(&stats.table_rows_removed.to_string()),
    );
}
