//! Ordered, in-memory bookmark store.
//!
//! The store is an arena: bookmarks are addressed by [`SlotId`] (their
//! insertion position) and are never removed or reordered once added.

use crate::types::{Bookmark, RawBookmark};

/// Position of a bookmark inside a [`BookmarkStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bookmarks split by export classification. Both halves keep store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub complete: Vec<&'a Bookmark>,
    pub incomplete: Vec<&'a Bookmark>,
}

/// Insertion-ordered collection of bookmarks. Duplicate URLs are independent entries.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parsed record and return its slot.
    pub fn add(&mut self, raw: RawBookmark) -> SlotId {
        self.push(Bookmark::from(raw))
    }

    /// Append an already-built bookmark and return its slot.
    pub fn push(&mut self, bookmark: Bookmark) -> SlotId {
        let slot = SlotId(self.bookmarks.len());
        self.bookmarks.push(bookmark);
        slot
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn get(&self, slot: SlotId) -> Option<&Bookmark> {
        self.bookmarks.get(slot.0)
    }

    /// Exclusive access to a single bookmark.
    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut Bookmark> {
        self.bookmarks.get_mut(slot.0)
    }

    /// Iterate `(slot, bookmark)` pairs in store order.
    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &Bookmark)> {
        self.bookmarks
            .iter()
            .enumerate()
            .map(|(i, b)| (SlotId(i), b))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.bookmarks.iter()
    }

    /// Split into complete (title and description both set) and incomplete.
    pub fn partition(&self) -> Partition<'_> {
        let (complete, incomplete) = self.bookmarks.iter().partition(|b| b.is_complete());
        Partition {
            complete,
            incomplete,
        }
    }
}

impl FromIterator<RawBookmark> for BookmarkStore {
    fn from_iter<I: IntoIterator<Item = RawBookmark>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<RawBookmark> for BookmarkStore {
    fn extend<I: IntoIterator<Item = RawBookmark>>(&mut self, iter: I) {
        for raw in iter {
            self.add(raw);
        }
    }
}

impl<'a> IntoIterator for &'a BookmarkStore {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.bookmarks.iter()
    }
}
