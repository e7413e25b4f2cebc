//! Pre-filter: lexical removal of constructs that cannot be spoken.
//!
//! URLs, filesystem paths and pipe tables are easier to catch in the raw text
//! than in the parsed document: a bare URL is just a text run to the parser,
//! and tables are not part of the CommonMark grammar at all. Everything here
//! is lossy; nothing removed is replaced by a placeholder.
//!
//! ## Rule Order
//!
//! URLs go first so that `https://host/a/b` is not half-eaten by the absolute
//! path rule. Backtick-wrapped paths go before bare paths so the backticks
//! disappear together with their content.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

/// Output of [`prefilter`]: the scrubbed text plus removal counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefiltered {
    /// Raw Markdown with the unspeakable constructs removed.
    pub text: String,
    /// Bare `http(s)://` URLs removed.
    pub urls_removed: usize,
    /// Backtick-wrapped, home-relative and absolute paths removed.
    pub paths_removed: usize,
    /// Table rows plus separator rows removed.
    pub table_rows_removed: usize,
}

/// Apply all pre-filter rules to raw Markdown.
///
/// Rules (applied in order):
/// 1. Remove bare `http(s)://` URLs (stopping before whitespace or `)`)
/// 2. Remove backtick-wrapped paths starting with `~` or `/`
/// 3. Replace bare `~/…` paths with a space
/// 4. Replace bare `/a/b…` paths with a space
/// 5. Remove `|…|` table rows
/// 6. Remove `|---|:--|` separator rows
pub fn prefilter(input: &str) -> Prefiltered {
    let (s, urls) = remove_urls(input);
    let (s, quoted) = remove_backtick_paths(&s);
    let (s, home) = remove_home_paths(&s);
    let (s, absolute) = remove_absolute_paths(&s);
    let (s, rows) = remove_table_rows(&s);
    let (text, separators) = remove_table_separators(&s);

    Prefiltered {
        text,
        urls_removed: urls,
        paths_removed: quoted + home + absolute,
        table_rows_removed: rows + separators,
    }
}

/// `replace_all` that also reports how many matches were replaced.
fn replace_counting(re: &Regex, input: &str, rep: &str, rule: &str) -> (String, usize) {
    let mut n = 0usize;
    let out = re
        .replace_all(input, |_: &Captures<'_>| {
            n += 1;
            rep
        })
        .into_owned();
    if n > 0 {
        trace!(rule, removed = n, "pre-filter rule matched");
    }
    (out, n)
}

// ── Rule 1: Bare URLs ────────────────────────────────────────────────────────

static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s)]+").unwrap());

fn remove_urls(input: &str) -> (String, usize) {
    replace_counting(&RE_URL, input, "", "url")
}

// ── Rule 2: Backtick-wrapped paths ───────────────────────────────────────────

static RE_BACKTICK_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[~/][^`]+`").unwrap());

fn remove_backtick_paths(input: &str) -> (String, usize) {
    replace_counting(&RE_BACKTICK_PATH, input, "", "backtick-path")
}

// ── Rule 3: Bare home-relative paths ─────────────────────────────────────────

static RE_HOME_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)~/[a-zA-Z0-9_./-]+").unwrap());

fn remove_home_paths(input: &str) -> (String, usize) {
    replace_counting(&RE_HOME_PATH, input, " ", "home-path")
}

// ── Rule 4: Bare absolute paths ──────────────────────────────────────────────
//
// At least two segments are required so `/etc` alone, or a word like `n/a`,
// survives.

static RE_ABSOLUTE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)/[a-zA-Z0-9_.-]+/[a-zA-Z0-9_./-]*").unwrap());

fn remove_absolute_paths(input: &str) -> (String, usize) {
    replace_counting(&RE_ABSOLUTE_PATH, input, " ", "absolute-path")
}

// ── Rule 5: Table rows ───────────────────────────────────────────────────────

static RE_TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\|.*\|$").unwrap());

fn remove_table_rows(input: &str) -> (String, usize) {
    replace_counting(&RE_TABLE_ROW, input, "", "table-row")
}

// ── Rule 6: Table separator rows ─────────────────────────────────────────────

static RE_TABLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\|[-:\s|]+\|\s*$").unwrap());

fn remove_table_separators(input: &str) -> (String, usize) {
    replace_counting(&RE_TABLE_SEPARATOR, input, "", "table-separator")
}

// ── Tests ────────────────────────────────────────────────────────────────────
