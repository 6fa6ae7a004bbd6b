//! Netscape bookmark-file parser.
//!
//! Every browser exports bookmarks in the same loose HTML dialect: nested
//! `<DL>` lists of `<DT><A HREF=… ADD_DATE=… ICON=…>` entries. Folder
//! structure is irrelevant here; we only want the anchors in document order.

use std::path::Path;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, instrument};

use bookmarklens_shared::{BookmarkLensError, RawBookmark, Result};

static ANCHOR_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector"));

/// Extract one [`RawBookmark`] per `<a>` element, in document order.
///
/// Missing `href`, `add_date`, or `icon` attributes become empty strings.
/// html5ever lowercases attribute names, so `ADD_DATE` is matched as `add_date`.
pub fn parse_bookmark_html(document: &str) -> Vec<RawBookmark> {
    let doc = Html::parse_document(document);

    doc.select(&ANCHOR_SEL)
        .map(|a| {
            let attr = |name: &str| a.value().attr(name).unwrap_or_default().to_string();
            RawBookmark {
                url: attr("href"),
                date_added: attr("add_date"),
                icon: attr("icon"),
            }
        })
        .collect()
}

/// Read and parse a bookmark file from disk.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_bookmark_file(path: &Path) -> Result<Vec<RawBookmark>> {
    let bytes = std::fs::read(path).map_err(|e| BookmarkLensError::io(path, e))?;
    let document = String::from_utf8_lossy(&bytes);
    let records = parse_bookmark_html(&document);
    debug!(count = records.len(), "parsed bookmark file");
    Ok(records)
}
