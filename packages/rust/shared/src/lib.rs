//! Shared types, error model, and configuration for bookmarklens.
//!
//! This crate is the foundation depended on by all other bookmarklens crates.
//! It provides:
//! - [`BookmarkLensError`] — the unified error type
//! - Domain types ([`Bookmark`], [`RawBookmark`], [`BookmarkRecord`])
//! - The ordered [`BookmarkStore`] and its [`SlotId`] handles
//! - Configuration ([`AppConfig`], [`RetrievalConfig`], config loading)

pub mod config;
pub mod error;
pub mod store;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, BodyEncoding, ExportConfig, RetrievalConfig, RetrievalSection, config_dir,
    config_file_path, init_config, load_config, load_config_from, render_config,
};
pub use error::{BookmarkLensError, Result};
pub use store::{BookmarkStore, Partition, SlotId};
pub use types::{Bookmark, BookmarkRecord, RawBookmark};
