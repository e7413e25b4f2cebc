//! Conversion output types.

use serde::{Deserialize, Serialize};

/// Result of a conversion: the speakable text and what was removed on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOutput {
    /// Plain text ready for a TTS engine. Never has leading or trailing whitespace.
    pub text: String,
    pub stats: StripStats,
}

/// Counters collected while converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripStats {
    /// Size of the Markdown input in bytes.
    pub input_bytes: usize,
    /// Size of the plain-text output in bytes.
    pub output_bytes: usize,
    /// Bare `http(s)://` URLs removed by the pre-filter.
    pub urls_removed: usize,
    /// Filesystem paths removed by the pre-filter (quoted and bare).
    pub paths_removed: usize,
    /// Pipe-table rows and separator rows removed by the pre-filter.
    pub table_rows_removed: usize,
}
