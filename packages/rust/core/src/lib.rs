//! Pipeline orchestration and export for bookmarklens.
//!
//! This crate ties together parsing, retrieval, and CSV export into the
//! end-to-end `enrich` workflow.

pub mod export;
pub mod pipeline;

pub use export::{CSV_HEADER, ExportSummary, export_partitions, render_csv, write_csv};
pub use pipeline::{EnrichConfig, EnrichResult, enrich_file, enrich_file_with, validate_retrieval};
