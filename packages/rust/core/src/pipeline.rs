//! End-to-end `enrich` pipeline: bookmark file → store → retrieval → CSV export.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use bookmarklens_crawler::{
    Coordinator, HttpFetcher, PageFetcher, RetrievalProgress, RetrievalSummary,
};
use bookmarklens_shared::{
    BookmarkLensError, BookmarkStore, ExportConfig, RetrievalConfig, Result,
};

use crate::export::{ExportSummary, export_partitions};

/// Configuration for [`enrich_file`].
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Netscape bookmark file to read.
    pub source: PathBuf,
    /// Retrieval settings.
    pub retrieval: RetrievalConfig,
    /// Output locations.
    pub export: ExportConfig,
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct EnrichResult {
    /// Bookmarks read from the source file.
    pub bookmarks: usize,
    /// Retrieval counts.
    pub retrieval: RetrievalSummary,
    /// Written files.
    pub export: ExportSummary,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Reject settings that cannot produce a meaningful run.
pub fn validate_retrieval(config: &RetrievalConfig) -> Result<()> {
    if config.timeout.is_zero() {
        return Err(BookmarkLensError::validation(
            "retrieval timeout must be greater than zero",
        ));
    }
    Ok(())
}

/// Run the full pipeline with a real HTTP fetcher.
#[instrument(skip_all, fields(source = %config.source.display()))]
pub async fn enrich_file(
    config: &EnrichConfig,
    progress: &dyn RetrievalProgress,
) -> Result<EnrichResult> {
    validate_retrieval(&config.retrieval)?;
    let fetcher = HttpFetcher::new(config.retrieval.encoding)?;
    enrich_file_with(config, fetcher, progress).await
}

/// Run the full pipeline with any [`PageFetcher`].
///
/// Setup errors (unreadable source, bad settings) abort before any request is
/// made. Once retrieval starts, only export I/O can fail the run.
pub async fn enrich_file_with<F: PageFetcher + 'static>(
    config: &EnrichConfig,
    fetcher: F,
    progress: &dyn RetrievalProgress,
) -> Result<EnrichResult> {
    let start = Instant::now();
    validate_retrieval(&config.retrieval)?;

    let records = bookmarklens_parser::read_bookmark_file(&config.source)?;
    let mut store: BookmarkStore = records.into_iter().collect();
    info!(bookmarks = store.len(), "loaded bookmarks");

    let coordinator = Coordinator::new(fetcher, &config.retrieval);
    let retrieval = coordinator.retrieve_all(&mut store, progress).await;

    let export = export_partitions(&store, &config.export)?;

    let result = EnrichResult {
        bookmarks: store.len(),
        retrieval,
        export,
        elapsed: start.elapsed(),
    };

    info!(
        bookmarks = result.bookmarks,
        complete = result.export.complete,
        incomplete = result.export.incomplete,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "enrich pipeline complete"
    );

    Ok(result)
}
