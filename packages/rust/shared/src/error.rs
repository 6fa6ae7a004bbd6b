//! Error types for bookmarklens.
//!
//! Library crates use [`BookmarkLensError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Per-bookmark fetch failures are *not* represented here: they live in the
//! crawler's `FetchError` and never leave a retrieval task.

use std::path::PathBuf;

/// Top-level error type for setup, parsing, and export operations.
#[derive(Debug, thiserror::Error)]
pub enum BookmarkLensError {
    /// Configuration loading or validation error. Fatal before retrieval starts.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network error outside of per-bookmark retrieval (e.g. building the HTTP client).
    #[error("network error: {0}")]
    Network(String),

    /// Bookmark file or browser JSON could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV serialization error.
    #[error("export error: {0}")]
    Export(String),

    /// Data validation error (bad flag values, out-of-range settings).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BookmarkLensError>;

impl BookmarkLensError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
