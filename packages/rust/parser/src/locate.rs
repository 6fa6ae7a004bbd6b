//! Default Chrome profile location per operating system.

use std::path::{Path, PathBuf};

use bookmarklens_shared::{BookmarkLensError, Result};

/// Path to the default-profile `Bookmarks` file for the running OS.
pub fn chrome_bookmarks_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BookmarkLensError::config("could not determine home directory"))?;
    chrome_bookmarks_path_in(std::env::consts::OS, &home)
}

/// Resolve the `Bookmarks` file for `os` (as in [`std::env::consts::OS`]) under `home`.
///
/// Unsupported platforms are a configuration error.
pub fn chrome_bookmarks_path_in(os: &str, home: &Path) -> Result<PathBuf> {
    let relative: &[&str] = match os {
        "windows" => &["AppData", "Local", "Google", "Chrome", "User Data", "Default"],
        "macos" => &["Library", "Application Support", "Google", "Chrome", "Default"],
        "linux" => &[".config", "google-chrome", "Default"],
        other => {
            return Err(BookmarkLensError::config(format!(
                "unsupported operating system: {other}"
            )));
        }
    };

    let mut path = home.to_path_buf();
    path.extend(relative);
    path.push("Bookmarks");
    Ok(path)
}
