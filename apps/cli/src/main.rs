//! bookmarklens CLI: enrich exported bookmarks with live page titles and descriptions.
//!
//! Reads a Netscape bookmark file, fetches every page in parallel, and writes
//! the results as two CSV files: bookmarks with a title and description, and
//! everything else.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
