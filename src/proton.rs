//! Proton runtime discovery
//!
//! Finds an installed Proton version under steamapps/common and composes
//! the wine/wineserver paths shipped inside a versioned Proton directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Versioned Proton installs are directories named like "Proton 7.0".
static PROTON_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Proton ([0-9]+(?:\.[0-9]+)?)").unwrap());

/// Return the version token of the first versioned Proton install found in
/// a steamapps/common directory.
///
/// Directory listing order is filesystem-dependent and not sorted, so with
/// several versioned installs present the one picked is not defined. Set
/// $PROTON_VERSION to pin a specific version.
pub fn detect_version(common: &Path) -> Option<String> {
    let entries = fs::read_dir(common).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(caps) = PROTON_DIR.captures(&name) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Path of a versioned Proton install inside a Steam root.
pub fn proton_dir(root: &Path, version: &str) -> PathBuf {
    root.join("steamapps/common").join(format!("Proton {version}"))
}

/// Wine binary shipped with a Proton install.
pub fn wine_path(root: &Path, version: &str) -> PathBuf {
    proton_dir(root, version).join("dist/bin/wine")
}

/// Wineserver binary shipped with a Proton install.
pub fn wineserver_path(root: &Path, version: &str) -> PathBuf {
    proton_dir(root, version).join("dist/bin/wineserver")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_version_picks_the_versioned_install() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["Proton 7.0", "Proton Experimental", "OtherThing 1.0"] {
            std::fs::create_dir(tmp.path().join(name)).unwrap();
        }

        // "Proton Experimental" has no version token and "OtherThing 1.0"
        // is not a Proton directory, so only one entry can match.
        assert_eq!(detect_version(tmp.path()), Some("7.0".to_string()));
    }

    #[test]
    fn detect_version_without_any_match() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("Proton Experimental")).unwrap();

        assert_eq!(detect_version(tmp.path()), None);
    }

    #[test]
    fn detect_version_unreadable_directory() {
        assert_eq!(detect_version(Path::new("/nonexistent/steamapps/common")), None);
    }

    #[test]
    fn wine_paths_composed_from_root_and_version() {
        let root = Path::new("/steam");
        assert_eq!(
            wine_path(root, "7.0"),
            PathBuf::from("/steam/steamapps/common/Proton 7.0/dist/bin/wine")
        );
        assert_eq!(
            wineserver_path(root, "7.0"),
            PathBuf::from("/steam/steamapps/common/Proton 7.0/dist/bin/wineserver")
        );
    }
}
