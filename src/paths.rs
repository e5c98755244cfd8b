use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap()));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Where winetricks lands when installed through the distro package manager.
/// Used when $WINETRICKS is not set.
pub const DEFAULT_WINETRICKS: &str = "/usr/bin/winetricks";

/// Conventional Steam installation roots, in probe order.
///
/// Native install first, then the symlinked legacy location, then Flatpak.
pub fn steam_root_candidates() -> Vec<PathBuf> {
    vec![
        PATH_LOCAL_SHARE.join("Steam"),
        PATH_HOME.join(".steam/steam"),
        PATH_HOME.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
    ]
}
