//! Core domain types: raw parsed records and enrichable bookmarks.

use serde::Serialize;

// ---------------------------------------------------------------------------
// RawBookmark
// ---------------------------------------------------------------------------

/// One anchor element as found in a bookmark export file.
///
/// All fields are opaque strings; missing attributes are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBookmark {
    pub url: String,
    pub date_added: String,
    pub icon: String,
}

impl RawBookmark {
    pub fn new(
        url: impl Into<String>,
        date_added: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            date_added: date_added.into(),
            icon: icon.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Bookmark
// ---------------------------------------------------------------------------

/// A bookmark as held by the store.
///
/// `url`, `date_added`, and `icon` are fixed at creation. `title` and
/// `description` start empty and can be filled in once, via [`Bookmark::enrich`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    url: String,
    date_added: String,
    icon: String,
    title: String,
    description: String,
    enriched: bool,
}

impl Bookmark {
    /// Create an un-enriched bookmark.
    pub fn new(
        url: impl Into<String>,
        date_added: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            date_added: date_added.into(),
            icon: icon.into(),
            title: String::new(),
            description: String::new(),
            enriched: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn date_added(&self) -> &str {
        &self.date_added
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this bookmark has already been written by a successful retrieval.
    pub fn is_enriched(&self) -> bool {
        self.enriched
    }

    /// Both title and description are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Record the result of a successful fetch+extract.
    ///
    /// Returns `false` (and changes nothing) if the bookmark was already enriched.
    pub fn enrich(&mut self, title: String, description: String) -> bool {
        if self.enriched {
            return false;
        }
        self.title = title;
        self.description = description;
        self.enriched = true;
        true
    }

    /// Flat export view with the `url,title,description,date,icon` column order.
    pub fn as_record(&self) -> BookmarkRecord<'_> {
        BookmarkRecord {
            url: &self.url,
            title: &self.title,
            description: &self.description,
            date: &self.date_added,
            icon: &self.icon,
        }
    }
}

impl From<RawBookmark> for Bookmark {
    fn from(raw: RawBookmark) -> Self {
        Self::new(raw.url, raw.date_added, raw.icon)
    }
}

/// Borrowed row written by the exporter. Field order is the CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookmarkRecord<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    pub icon: &'a str,
}
