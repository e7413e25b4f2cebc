//! Configuration types for Markdown-to-speech conversion.
//!
//! All conversion behaviour is controlled through [`StripConfig`], built via
//! its [`StripConfigBuilder`]. The defaults reproduce the broad policy:
//! Unicode-category symbol filtering, HTML entity decoding, removal of empty
//! `[]`/`()` pairs and strikethrough parsing.
//!
//! Two symbol policies exist and they disagree on real input (an emoji that is
//! not on the denylist, or text full of `&amp;`). They are exposed as separate,
//! explicit knobs rather than blended into one behaviour.

use crate::error::Md2TtsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configuration for a Markdown-to-speech conversion.
///
/// Built via [`StripConfig::builder()`] or using [`StripConfig::default()`].
///
/// # Example
/// ```rust
/// use edgequake_md2tts::{BracketCleanup, StripConfig, SymbolFilter};
///
/// let config = StripConfig::builder()
///     .symbol_filter(SymbolFilter::Denylist)
///     .bracket_cleanup(BracketCleanup::All)
///     .build();
/// assert!(config.decode_entities);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Which non-speakable symbols are removed. Default: [`SymbolFilter::UnicodeCategory`].
    pub symbol_filter: SymbolFilter,

    /// Decode HTML entities (`&amp;`, `&#39;`, `&#x2014;`) into literal
    /// characters after symbol filtering. Default: true.
    pub decode_entities: bool,

    /// How leftover brackets are cleaned up. Default: [`BracketCleanup::EmptyPairs`].
    pub bracket_cleanup: BracketCleanup,

    /// Recognise `~~text~~` as strikethrough. Default: true.
    ///
    /// When disabled the tildes reach the output as literal text.
    pub strikethrough: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            symbol_filter: SymbolFilter::default(),
            decode_entities: true,
            bracket_cleanup: BracketCleanup::default(),
            strikethrough: true,
        }
    }
}

impl StripConfig {
    /// Create a new builder for `StripConfig`.
    pub fn builder() -> StripConfigBuilder {
        StripConfigBuilder {
            config: Self::default(),
        }
    }

    /// The narrow policy: fixed symbol denylist, no entity decoding.
    pub fn narrow() -> Self {
        Self {
            symbol_filter: SymbolFilter::Denylist,
            decode_entities: false,
            ..Self::default()
        }
    }
}

/// Builder for [`StripConfig`].
#[derive(Debug)]
pub struct StripConfigBuilder {
    config: StripConfig,
}

impl StripConfigBuilder {
    pub fn symbol_filter(mut self, filter: SymbolFilter) -> Self {
        self.config.symbol_filter = filter;
        self
    }

    pub fn decode_entities(mut self, v: bool) -> Self {
        self.config.decode_entities = v;
        self
    }

    pub fn bracket_cleanup(mut self, cleanup: BracketCleanup) -> Self {
        self.config.bracket_cleanup = cleanup;
        self
    }

    pub fn strikethrough(mut self, v: bool) -> Self {
        self.config.strikethrough = v;
        self
    }

    /// Finish the configuration. Every field combination is valid.
    pub fn build(self) -> StripConfig {
        self.config
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Policy for removing symbols that do not read naturally in speech.
///
/// | Policy | Removes |
/// |--------|---------|
/// | `UnicodeCategory` | every `So` (Other Symbol) char: emoji, dingbats, arrows-as-pictographs |
/// | `Denylist` | only ✔ ✅ ❌ ⛔ ⚠ |
///
/// Both policies also drop the variation selectors U+FE00–U+FE0F, which would
/// otherwise survive as invisible trailing modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolFilter {
    /// Remove the whole Other Symbol general category. (default)
    #[default]
    UnicodeCategory,
    /// Remove a fixed set of status marks only.
    Denylist,
}

impl SymbolFilter {
    /// Code points removed by [`SymbolFilter::Denylist`].
    pub const DENYLIST: [char; 5] = ['\u{2714}', '\u{2705}', '\u{274C}', '\u{26D4}', '\u{26A0}'];
}

impl fmt::Display for SymbolFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolFilter::UnicodeCategory => "category",
            SymbolFilter::Denylist => "denylist",
        })
    }
}

impl FromStr for SymbolFilter {
    type Err = Md2TtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" | "unicode-category" => Ok(SymbolFilter::UnicodeCategory),
            "denylist" => Ok(SymbolFilter::Denylist),
            other => Err(Md2TtsError::InvalidConfig(format!(
                "unknown symbol filter '{other}' (expected 'category' or 'denylist')"
            ))),
        }
    }
}

/// Policy for brackets left behind once link targets are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketCleanup {
    /// Remove only the literal pairs `[]` and `()`. (default)
    #[default]
    EmptyPairs,
    /// Remove every `(`, `)`, `[` and `]`.
    All,
}

impl fmt::Display for BracketCleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BracketCleanup::EmptyPairs => "empty-pairs",
            BracketCleanup::All => "all",
        })
    }
}

impl FromStr for BracketCleanup {
    type Err = Md2TtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty-pairs" | "empty" => Ok(BracketCleanup::EmptyPairs),
            "all" => Ok(BracketCleanup::All),
            other => Err(Md2TtsError::InvalidConfig(format!(
                "unknown bracket cleanup '{other}' (expected 'empty-pairs' or 'all')"
            ))),
        }
    }
}
