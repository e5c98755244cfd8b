mod config;
mod launch;
mod paths;
mod proton;
mod steam;

use std::process;

use clap::{CommandFactory, Parser};
use log::{error, info};

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "protontricks", version)]
#[command(about = "Run winetricks against the Proton prefix of a Steam app")]
struct Cli {
    /// Steam app ID of the game
    app_id: Option<String>,

    /// Arguments forwarded verbatim to winetricks
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let Some(app_id) = cli.app_id else {
        let _ = Cli::command().print_help();
        process::exit(0);
    };

    let overrides = Overrides::from_env();
    let cfg = match config::resolve(&overrides, &app_id) {
        Ok(cfg) => cfg,
        Err(failures) => {
            for failure in &failures {
                error!("{failure}");
            }
            error!("prefix discovery failed, not launching winetricks");
            process::exit(1);
        }
    };

    info!("using prefix {}", cfg.prefix.display());

    match launch::run_winetricks(&cfg, &cli.args) {
        // A child killed by a signal has no exit code; treat it as a failure.
        Ok(status) => process::exit(status.code().unwrap_or(1)),
        Err(e) => {
            error!("failed to launch {}: {}", cfg.winetricks.display(), e);
            process::exit(1);
        }
    }
}
