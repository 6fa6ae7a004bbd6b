//! Page retrieval and enrichment for bookmarks.
//!
//! This crate provides:
//! - [`validator`] — which bookmark URLs are retrievable at all
//! - [`fetcher`] — one bounded-timeout GET per call ([`PageFetcher`], [`HttpFetcher`])
//! - [`extractor`] — page title and description from raw markup
//! - [`engine`] — the bounded-parallel [`Coordinator`] that ties them together

pub mod engine;
pub mod extractor;
pub mod fetcher;
pub mod validator;

pub use engine::{
    Coordinator, RetrievalOutcome, RetrievalProgress, RetrievalSummary, SilentProgress,
    progress_percent,
};
pub use extractor::{PageSummary, extract};
pub use fetcher::{FailureReason, FetchError, HttpFetcher, PageFetcher};
pub use validator::UrlValidator;
