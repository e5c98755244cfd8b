//! winetricks invocation
//!
//! Builds the delegated command with the resolved Wine environment and runs
//! it to completion.

use std::io;
use std::process::{Command, ExitStatus};

use log::info;

use crate::config::RunConfig;

/// Build the winetricks command for a resolved configuration.
///
/// Trailing CLI arguments are forwarded untouched. WINEPREFIX always points
/// at the resolved prefix; WINE and WINESERVER carry the resolved paths,
/// which are the caller's own values whenever they were overridden.
pub fn winetricks_command(cfg: &RunConfig, args: &[String]) -> Command {
    let mut cmd = Command::new(&cfg.winetricks);
    cmd.args(args);
    cmd.env("WINEPREFIX", &cfg.prefix);
    cmd.env("WINE", &cfg.wine);
    cmd.env("WINESERVER", &cfg.wineserver);
    cmd
}

/// Run winetricks and block until it exits.
pub fn run_winetricks(cfg: &RunConfig, args: &[String]) -> io::Result<ExitStatus> {
    let mut cmd = winetricks_command(cfg, args);
    info!(
        "running {} against {}",
        cfg.winetricks.display(),
        cfg.prefix.display()
    );
    cmd.status()
}
