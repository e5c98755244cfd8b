//! Run configuration
//!
//! Every value winetricks needs is resolved here, field by field: an
//! environment override wins, discovery fills the gap, and each field stays
//! unresolved until one of the two produced it. Failures accumulate instead
//! of short-circuiting so a single run reports every problem at once.

use std::env;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::paths;
use crate::proton;
use crate::steam;

/// A prerequisite that neither the environment nor discovery could satisfy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("no Steam installation found; set STEAM_DIR to point at one")]
    SteamRootNotFound,
    #[error("winetricks not found at {0}; install it or set WINETRICKS")]
    WinetricksNotFound(PathBuf),
    #[error("no versioned Proton install found under steamapps/common; set PROTON_VERSION")]
    ProtonVersionNotFound,
    #[error("no Proton prefix for app {0}; run the game once through Steam first")]
    PrefixNotFound(String),
}

/// Snapshot of the override environment variables, taken once per run.
#[derive(Debug, Default)]
pub struct Overrides {
    pub steam_dir: Option<PathBuf>,
    pub winetricks: Option<PathBuf>,
    pub proton_version: Option<String>,
    pub wine: Option<PathBuf>,
    pub wineserver: Option<PathBuf>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            steam_dir: env::var_os("STEAM_DIR").map(PathBuf::from),
            winetricks: env::var_os("WINETRICKS").map(PathBuf::from),
            proton_version: env::var("PROTON_VERSION").ok(),
            wine: env::var_os("WINE").map(PathBuf::from),
            wineserver: env::var_os("WINESERVER").map(PathBuf::from),
        }
    }
}

/// Fully resolved configuration for one winetricks run.
#[derive(Debug)]
pub struct RunConfig {
    pub steam_root: PathBuf,
    pub winetricks: PathBuf,
    pub proton_version: String,
    pub wine: PathBuf,
    pub wineserver: PathBuf,
    pub prefix: PathBuf,
}

/// Resolve everything needed to run winetricks against an app's prefix.
pub fn resolve(overrides: &Overrides, app_id: &str) -> Result<RunConfig, Vec<DiscoveryError>> {
    resolve_in(
        overrides,
        &paths::steam_root_candidates(),
        Path::new(paths::DEFAULT_WINETRICKS),
        app_id,
    )
}

fn resolve_in(
    overrides: &Overrides,
    root_candidates: &[PathBuf],
    winetricks_default: &Path,
    app_id: &str,
) -> Result<RunConfig, Vec<DiscoveryError>> {
    let mut failures = Vec::new();

    let steam_root = overrides
        .steam_dir
        .clone()
        .or_else(|| steam::locate_root(root_candidates));
    match &steam_root {
        Some(root) => info!("using Steam installation at {}", root.display()),
        None => failures.push(DiscoveryError::SteamRootNotFound),
    }

    // The override is taken at face value; only the packaged default is
    // existence-checked.
    let winetricks = match &overrides.winetricks {
        Some(path) => Some(path.clone()),
        None if winetricks_default.is_file() => Some(winetricks_default.to_path_buf()),
        None => {
            failures.push(DiscoveryError::WinetricksNotFound(
                winetricks_default.to_path_buf(),
            ));
            None
        }
    };

    let proton_version = match &overrides.proton_version {
        Some(version) => Some(version.clone()),
        None => {
            let detected = steam_root
                .as_ref()
                .and_then(|root| proton::detect_version(&root.join("steamapps/common")));
            match &detected {
                Some(version) => info!("using Proton {version}"),
                None => failures.push(DiscoveryError::ProtonVersionNotFound),
            }
            detected
        }
    };

    let prefix = steam_root.as_ref().and_then(|root| {
        let libraries = steam::library_folders(root);
        steam::find_prefix(root, &libraries, app_id)
    });
    if prefix.is_none() {
        failures.push(DiscoveryError::PrefixNotFound(app_id.to_string()));
    }

    if !failures.is_empty() {
        return Err(failures);
    }

    // An empty failure list proves root, winetricks, version and prefix all
    // resolved, so the runtime paths can be composed from them.
    let steam_root = steam_root.unwrap();
    let proton_version = proton_version.unwrap();
    let wine = overrides
        .wine
        .clone()
        .unwrap_or_else(|| proton::wine_path(&steam_root, &proton_version));
    let wineserver = overrides
        .wineserver
        .clone()
        .unwrap_or_else(|| proton::wineserver_path(&steam_root, &proton_version));

    Ok(RunConfig {
        steam_root,
        winetricks: winetricks.unwrap(),
        proton_version,
        wine,
        wineserver,
        prefix: prefix.unwrap(),
    })
}
