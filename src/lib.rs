//! # edgequake-md2tts
//!
//! Convert Markdown into plain text that a text-to-speech engine can read aloud.
//!
//! ## Why this crate?
//!
//! Feeding raw Markdown to a TTS engine produces "asterisk asterisk note",
//! spelled-out URLs, pipe characters from tables and code read token by token.
//! Rendering to HTML and stripping tags loses the sentence boundaries that make
//! speech sound natural. This crate walks the parsed document instead and
//! emits text with spoken punctuation: headings and list items become short
//! sentences, code and raw HTML disappear, link labels stay while targets go.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Pre-filter  remove bare URLs, file paths, pipe tables (regex)
//!  ├─ 2. Render      pulldown-cmark events → per-node-kind text rules
//!  ├─ 3. Normalise   backticks, empty brackets, emoji, entities, whitespace
//!  └─ 4. Output      one line of speakable text
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use edgequake_md2tts::strip_markdown;
//!
//! let text = strip_markdown("## Status\n\n- ✅ **Build** passing\n- See [the docs](https://example.com)");
//! assert_eq!(text, "Status. Build passing. See the docs.");
//! ```
//!
//! For a non-default policy build a [`Stripper`] once and reuse it:
//!
//! ```rust
//! use edgequake_md2tts::{StripConfig, Stripper};
//!
//! let stripper = Stripper::new(StripConfig::narrow());
//! assert_eq!(stripper.strip("Tom &amp;amp; Jerry ⚠️"), "Tom &amp; Jerry");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2tts` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-md2tts = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{BracketCleanup, StripConfig, StripConfigBuilder, SymbolFilter};
pub use convert::{strip_file, strip_markdown, strip_to_file, write_output, Stripper};
pub use error::Md2TtsError;
pub use output::{StripOutput, StripStats};
