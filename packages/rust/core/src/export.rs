//! CSV export of the complete / incomplete partitions.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use bookmarklens_shared::{Bookmark, BookmarkLensError, BookmarkStore, ExportConfig, Result};

/// Column order of both output files.
pub const CSV_HEADER: [&str; 5] = ["url", "title", "description", "date", "icon"];

/// Where the partitions went and how big they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub complete: usize,
    pub incomplete: usize,
    pub complete_path: PathBuf,
    pub incomplete_path: PathBuf,
}

/// Write a header row plus one row per bookmark.
///
/// The header is always written, so an empty partition still yields a valid file.
pub fn write_csv<W: Write>(writer: W, bookmarks: &[&Bookmark]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    out.write_record(CSV_HEADER).map_err(export_err)?;
    for bookmark in bookmarks {
        out.serialize(bookmark.as_record()).map_err(export_err)?;
    }
    out.flush()
        .map_err(|e| BookmarkLensError::Export(e.to_string()))
}

/// Render a partition to an in-memory CSV string.
pub fn render_csv(bookmarks: &[&Bookmark]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, bookmarks)?;
    String::from_utf8(buf).map_err(|e| BookmarkLensError::Export(e.to_string()))
}

/// Partition `store` and write both CSV files described by `config`.
///
/// The output directory is created if missing. Existing files are overwritten.
#[instrument(skip_all, fields(output_dir = %config.output_dir.display()))]
pub fn export_partitions(store: &BookmarkStore, config: &ExportConfig) -> Result<ExportSummary> {
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| BookmarkLensError::io(&config.output_dir, e))?;

    let partition = store.partition();
    let complete_path = config.complete_path();
    let incomplete_path = config.incomplete_path();

    write_file(&complete_path, &partition.complete)?;
    write_file(&incomplete_path, &partition.incomplete)?;

    let summary = ExportSummary {
        complete: partition.complete.len(),
        incomplete: partition.incomplete.len(),
        complete_path,
        incomplete_path,
    };

    info!(
        complete = summary.complete,
        incomplete = summary.incomplete,
        "export written"
    );

    Ok(summary)
}

fn write_file(path: &Path, bookmarks: &[&Bookmark]) -> Result<()> {
    let file = File::create(path).map_err(|e| BookmarkLensError::io(path, e))?;
    write_csv(file, bookmarks)
}

fn export_err(err: csv::Error) -> BookmarkLensError {
    BookmarkLensError::Export(err.to_string())
}
