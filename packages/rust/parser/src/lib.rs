//! Bookmark source formats.
//!
//! This crate provides:
//! - [`netscape`] — parse a Netscape bookmark export into [`RawBookmark`]s
//! - [`chrome`] — convert Chrome's `Bookmarks` JSON into that HTML format
//! - [`locate`] — find Chrome's `Bookmarks` file on the current machine
//!
//! [`RawBookmark`]: bookmarklens_shared::RawBookmark

pub mod chrome;
pub mod locate;
pub mod netscape;

pub use chrome::{ChromeBookmarks, ChromeNode, ChromeRoots, convert_file, dated_output_name};
pub use locate::{chrome_bookmarks_path, chrome_bookmarks_path_in};
pub use netscape::{parse_bookmark_html, read_bookmark_file};
