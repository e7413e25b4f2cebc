//! Conversion entry points.
//!
//! [`strip_markdown`] is the one-call API with the default policy.
//! [`Stripper`] holds a finished [`StripConfig`] together with the parser
//! options derived from it; build one at start-up and share it (it is
//! `Send + Sync`) instead of re-deriving configuration per call.
//!
//! The core functions do no I/O and keep no state between calls: the same
//! input and configuration always produce the same text. [`strip_file`] and
//! [`strip_to_file`] are thin filesystem wrappers around them, and
//! [`write_output`] is the one place output files are written.

use crate::config::StripConfig;
use crate::error::Md2TtsError;
use crate::output::{StripOutput, StripStats};
use crate::pipeline::{postprocess, prefilter, render};
use pulldown_cmark::{Options, Parser};
use std::path::Path;
use tracing::{debug, info};

/// Convert Markdown to plain text for TTS using the default configuration.
///
/// # Example
/// ```rust
/// use edgequake_md2tts::strip_markdown;
///
/// assert_eq!(strip_markdown("# Title"), "Title.");
/// assert_eq!(strip_markdown("- a\n- b"), "a. b.");
/// ```
pub fn strip_markdown(text: &str) -> String {
    Stripper::default().strip(text)
}

/// A ready-to-use converter built from an immutable [`StripConfig`].
#[derive(Debug, Clone)]
pub struct Stripper {
    config: StripConfig,
    options: Options,
}

impl Default for Stripper {
    fn default() -> Self {
        Self::new(StripConfig::default())
    }
}

impl Stripper {
    /// Build a converter, deriving the parser options from `config` once.
    pub fn new(config: StripConfig) -> Self {
        Self {
            options: render::parser_options(config.strikethrough),
            config,
        }
    }

    /// The configuration this converter was built from.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Convert `text` to speakable plain text.
    pub fn strip(&self, text: &str) -> String {
        self.strip_with_stats(text).text
    }

    /// Convert `text` and report what the pre-filter removed.
    pub fn strip_with_stats(&self, text: &str) -> StripOutput {
        // ── Step 1: Pre-filter raw text ──────────────────────────────────
        let filtered = prefilter::prefilter(text);
        debug!(
            urls = filtered.urls_removed,
            paths = filtered.paths_removed,
            table_rows = filtered.table_rows_removed,
            "Pre-filter done"
        );

        // ── Step 2: Parse and render ─────────────────────────────────────
        let rendered = render::render(Parser::new_ext(&filtered.text, self.options));
        debug!(bytes = rendered.len(), "Rendered Markdown events");

        // ── Step 3: Normalise ────────────────────────────────────────────
        let plain = postprocess::normalize(&rendered, &self.config);

        let stats = StripStats {
            input_bytes: text.len(),
            output_bytes: plain.len(),
            urls_removed: filtered.urls_removed,
            paths_removed: filtered.paths_removed,
            table_rows_removed: filtered.table_rows_removed,
        };
        debug!(
            input_bytes = stats.input_bytes,
            output_bytes = stats.output_bytes,
            "Conversion complete"
        );

        StripOutput { text: plain, stats }
    }
}

/// Read a Markdown file and convert it.
///
/// # Errors
/// [`Md2TtsError::FileNotFound`], [`Md2TtsError::PermissionDenied`],
/// [`Md2TtsError::InvalidUtf8`] or [`Md2TtsError::ReadFailed`] when the file
/// cannot be read as UTF-8 text. Conversion itself cannot fail.
pub fn strip_file(
    input_path: impl AsRef<Path>,
    config: &StripConfig,
) -> Result<StripOutput, Md2TtsError> {
    let path = input_path.as_ref();
    info!("Reading {}", path.display());
    let markdown = std::fs::read_to_string(path)
        .map_err(|e| Md2TtsError::from_read(path.to_path_buf(), e))?;
    Ok(Stripper::new(*config).strip_with_stats(&markdown))
}

/// Convert a Markdown file and write the plain text to `output_path`.
///
/// The output ends with a single newline. See [`write_output`] for how the
/// file is written.
pub fn strip_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &StripConfig,
) -> Result<StripStats, Md2TtsError> {
    let output = strip_file(input_path, config)?;
    write_output(output_path, &format!("{}\n", output.text))?;
    Ok(output.stats)
}

/// Write already-converted `contents` to `output_path`.
///
/// Uses atomic write (temp file + rename) so a failed run never leaves a
/// partial file behind; missing parent directories are created.
pub fn write_output(output_path: impl AsRef<Path>, contents: &str) -> Result<(), Md2TtsError> {
    let path = output_path.as_ref();
    let write_err = |e: std::io::Error| Md2TtsError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = path.with_extension("txt.tmp");
    std::fs::write(&tmp_path, contents).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
