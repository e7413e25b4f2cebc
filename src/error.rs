//! Error types for the edgequake-md2tts library.
//!
//! The conversion itself is total: [`crate::strip_markdown`] and
//! [`crate::Stripper::strip`] return a `String` for every `&str` input, because
//! the markdown grammar accepts any text. Errors only arise on the surfaces
//! that touch the outside world:
//!
//! * reading an input file ([`crate::strip_file`]),
//! * writing an output file ([`crate::strip_to_file`]),
//! * parsing a policy name supplied as a string (CLI flag, env var).

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the edgequake-md2tts library.
#[derive(Debug, Error)]
pub enum Md2TtsError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file was read but its bytes are not valid UTF-8.
    #[error("File '{path}' is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    /// Any other I/O failure while reading the input.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output text file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// A policy name or option value was not recognised.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Md2TtsError {
    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_read(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Md2TtsError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Md2TtsError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => Md2TtsError::InvalidUtf8 { path },
            _ => Md2TtsError::ReadFailed { path, source: err },
        }
    }
}
