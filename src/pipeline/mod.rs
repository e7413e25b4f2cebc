//! Pipeline stages for Markdown-to-speech conversion.
//!
//! Each submodule implements exactly one transformation step and is a pure
//! `&str → String` function, so each is independently testable.
//!
//! ## Data Flow
//!
//! ```text
//! prefilter ──▶ pulldown-cmark ──▶ render ──▶ postprocess
//! (regex)       (events)           (rules)    (cleanup)
//! ```
//!
//! 1. [`prefilter`]: remove URLs, paths and pipe tables from the raw text
//! 2. [`render`]: per-node-kind rules over the parser's event stream
//! 3. [`postprocess`]: strip leftovers, symbols and entities; normalise spacing

pub mod postprocess;
pub mod prefilter;
pub mod render;
