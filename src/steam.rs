//! Steam installation discovery
//!
//! Locates the Steam root, enumerates secondary library folders from
//! libraryfolders.vdf and resolves an app ID to its Proton prefix.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

/// Marker subdirectory proving a candidate is a Steam root. Very old
/// installs used the capitalized spelling, so both are accepted.
const APPS_MARKERS: [&str; 2] = ["steamapps", "SteamApps"];

/// The `TAB "KEY" TAB TAB "VALUE"` line shape used by libraryfolders.vdf.
static LIBRARY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"([^"]+)"\s+"([^"]*)"\s*$"#).unwrap());

/// Return the first candidate that contains a steamapps marker directory.
pub fn locate_root(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| APPS_MARKERS.iter().any(|marker| dir.join(marker).is_dir()))
        .cloned()
}

/// Classification of a single libraryfolders.vdf line.
#[derive(Debug, PartialEq, Eq)]
enum LibraryLine<'a> {
    /// Numeric key: an extra library folder at the given path
    Folder(&'a str),
    /// Quoted key/value pair with a non-numeric key
    Metadata,
    /// Header, braces, or anything else that isn't a key/value pair
    Unmatched,
}

fn scan_line(line: &str) -> LibraryLine<'_> {
    let Some((_, [key, value])) = LIBRARY_LINE.captures(line).map(|c| c.extract()) else {
        return LibraryLine::Unmatched;
    };
    if key.parse::<u32>().is_ok() {
        LibraryLine::Folder(value)
    } else {
        LibraryLine::Metadata
    }
}

/// Extract the secondary library folder paths from libraryfolders.vdf text.
///
/// Only numeric-keyed entries are folders; metadata and malformed lines are
/// skipped rather than treated as errors. Order follows the file and
/// duplicates are kept.
pub fn parse_library_folders(text: &str) -> Vec<PathBuf> {
    text.lines()
        .filter_map(|line| match scan_line(line) {
            LibraryLine::Folder(path) => Some(PathBuf::from(path)),
            LibraryLine::Metadata | LibraryLine::Unmatched => None,
        })
        .collect()
}

/// Read the library list for a Steam root.
///
/// A missing file means no extra libraries, which is the common case.
pub fn library_folders(root: &Path) -> Vec<PathBuf> {
    let vdf_path = root.join("steamapps/libraryfolders.vdf");
    match fs::read_to_string(&vdf_path) {
        Ok(text) => {
            let folders = parse_library_folders(&text);
            debug!(
                "{} extra library folders listed in {}",
                folders.len(),
                vdf_path.display()
            );
            folders
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            warn!("could not read {}: {}", vdf_path.display(), e);
            Vec::new()
        }
    }
}

/// Probe the root and every library folder for the app's Proton prefix.
///
/// The primary installation is always checked first, then the library
/// entries in file order.
pub fn find_prefix(root: &Path, libraries: &[PathBuf], app_id: &str) -> Option<PathBuf> {
    std::iter::once(root)
        .chain(libraries.iter().map(PathBuf::as_path))
        .map(|dir| dir.join("steamapps/compatdata").join(app_id).join("pfx"))
        .find(|pfx| pfx.is_dir())
}
