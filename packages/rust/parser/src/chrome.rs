//! Chrome `Bookmarks` JSON → Netscape bookmark HTML.
//!
//! Chrome keeps bookmarks in a JSON file inside the profile directory rather
//! than exposing an HTML export on disk. This module renders that tree as a
//! Netscape bookmark file so it can flow through [`crate::parse_bookmark_html`].

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument};

use bookmarklens_shared::{BookmarkLensError, Result};

/// Seconds between 1601-01-01 (Chrome/Windows epoch) and 1970-01-01.
const WINDOWS_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

// ---------------------------------------------------------------------------
// JSON model
// ---------------------------------------------------------------------------

/// Root of Chrome's `Bookmarks` file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChromeBookmarks {
    pub roots: ChromeRoots,
}

/// The named top-level folders. Only `bookmark_bar` and `other` are exported.
#[derive(Debug, Clone, Deserialize)]
pub struct ChromeRoots {
    pub bookmark_bar: ChromeNode,
    pub other: ChromeNode,
}

/// A node in the bookmark tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChromeNode {
    Folder {
        #[serde(default)]
        name: String,
        #[serde(default)]
        children: Vec<ChromeNode>,
    },
    Url {
        #[serde(default)]
        name: String,
        url: String,
        #[serde(default)]
        date_added: Option<String>,
    },
    /// Node types this converter does not know about.
    #[serde(other)]
    Unknown,
}

impl ChromeBookmarks {
    /// Parse the JSON text of a `Bookmarks` file.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BookmarkLensError::parse(format!("invalid Chrome bookmarks JSON: {e}")))
    }

    /// Read and parse a `Bookmarks` file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| BookmarkLensError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Render the bookmark bar and "other bookmarks" folders as a Netscape bookmark file.
    pub fn to_netscape_html(&self) -> String {
        let mut out = String::from(
            "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
             <META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
             <TITLE>Bookmarks</TITLE>\n\
             <H1>Bookmarks</H1>\n\
             <DL><p>\n",
        );
        for root in [&self.roots.bookmark_bar, &self.roots.other] {
            render_node(root, 0, &mut out);
        }
        out.push_str("</DL><p>\n");
        out
    }
}

fn render_node(node: &ChromeNode, depth: usize, out: &mut String) {
    let indent = "\t".repeat(depth);
    match node {
        ChromeNode::Folder { name, children } => {
            let _ = writeln!(out, "{indent}<DT><H3>{}</H3></DT>", escape_html(name));
            let _ = writeln!(out, "{indent}<DL><p>");
            for child in children {
                render_node(child, depth + 1, out);
            }
            let _ = writeln!(out, "{indent}</DL><p>");
        }
        ChromeNode::Url {
            name,
            url,
            date_added,
        } => {
            let add_date = date_added
                .as_deref()
                .and_then(chrome_time_to_unix)
                .map(|secs| format!(" ADD_DATE=\"{secs}\""))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{indent}<DT><A HREF=\"{}\"{add_date}>{}</A>",
                escape_html(url),
                escape_html(name)
            );
        }
        ChromeNode::Unknown => {}
    }
}

/// Convert Chrome's microseconds-since-1601 timestamp to Unix seconds.
fn chrome_time_to_unix(raw: &str) -> Option<i64> {
    let micros: i64 = raw.trim().parse().ok()?;
    let secs = micros / 1_000_000 - WINDOWS_EPOCH_OFFSET_SECS;
    (secs > 0).then_some(secs)
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Default file name for a converted export, e.g. `chromebookmarks2026-10-19.html`.
pub fn dated_output_name(date: NaiveDate) -> String {
    format!("chromebookmarks{}.html", date.format("%Y-%m-%d"))
}

/// Convert a Chrome `Bookmarks` file and write the HTML to `output`.
///
/// Parent directories of `output` are created as needed.
#[instrument(skip_all, fields(source = %source.display(), output = %output.display()))]
pub fn convert_file(source: &Path, output: &Path) -> Result<()> {
    let html = ChromeBookmarks::from_path(source)?.to_netscape_html();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BookmarkLensError::io(parent, e))?;
    }
    std::fs::write(output, &html).map_err(|e| BookmarkLensError::io(output, e))?;

    debug!(bytes = html.len(), "wrote converted bookmark file");
    Ok(())
}
