//! Post-processing: turn renderer output into clean, speakable plain text.
//!
//! The renderer already removed structure, but a few artefacts survive it:
//! stray backticks from unbalanced code spans, `[]`/`()` left behind after the
//! pre-filter blanked a link target, emoji and status marks, HTML entities and
//! the uneven spacing that block punctuation introduces.
//!
//! ## Rule Order
//!
//! Whitespace is collapsed twice: once before symbol filtering so the filter
//! sees single-spaced text, and again at the end because removing a symbol
//! or decoding `&nbsp;` can reopen a gap.

use crate::config::{BracketCleanup, StripConfig, SymbolFilter};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Apply all post-processing rules to the rendered text.
///
/// Rules (applied in order):
/// 1. Remove backticks
/// 2. Bracket cleanup (`[]`/`()` pairs, or every bracket)
/// 3. Collapse whitespace
/// 4. Remove non-speakable symbols and variation selectors
/// 5. Decode HTML entities (when enabled)
/// 6. Collapse whitespace again
/// 7. Trim
pub fn normalize(input: &str, config: &StripConfig) -> String {
    let s = remove_backticks(input);
    let s = clean_brackets(&s, config.bracket_cleanup);
    let s = collapse_whitespace(&s);
    let s = remove_symbols(&s, config.symbol_filter);
    let s = if config.decode_entities {
        decode_entities(&s)
    } else {
        s
    };
    let s = collapse_whitespace(&s);
    s.trim().to_string()
}

// ── Rule 1: Backticks ────────────────────────────────────────────────────────

fn remove_backticks(input: &str) -> String {
    input.replace('`', "")
}

// ── Rule 2: Brackets ─────────────────────────────────────────────────────────

static RE_EMPTY_PAIRS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\]|\(\)").unwrap());

fn clean_brackets(input: &str, policy: BracketCleanup) -> String {
    match policy {
        BracketCleanup::EmptyPairs => RE_EMPTY_PAIRS.replace_all(input, "").into_owned(),
        BracketCleanup::All => input.replace(['(', ')', '[', ']'], ""),
    }
}

// ── Rules 3 and 6: Whitespace ────────────────────────────────────────────────

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn collapse_whitespace(input: &str) -> String {
    RE_WHITESPACE.replace_all(input, " ").into_owned()
}

// ── Rule 4: Symbols ──────────────────────────────────────────────────────────

fn is_variation_selector(c: char) -> bool {
    ('\u{FE00}'..='\u{FE0F}').contains(&c)
}

fn is_unspeakable(c: char, filter: SymbolFilter) -> bool {
    if is_variation_selector(c) {
        return true;
    }
    match filter {
        SymbolFilter::UnicodeCategory => get_general_category(c) == GeneralCategory::OtherSymbol,
        SymbolFilter::Denylist => SymbolFilter::DENYLIST.contains(&c),
    }
}

fn remove_symbols(input: &str, filter: SymbolFilter) -> String {
    input.chars().filter(|&c| !is_unspeakable(c, filter)).collect()
}

// ── Rule 5: HTML entities ────────────────────────────────────────────────────

fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

// ── Tests ────────────────────────────────────────────────────────────────────
