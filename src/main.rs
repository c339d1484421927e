mod app;
mod capture;
mod cli;
mod config;
mod consts;
mod error;
mod notes;
mod output;
mod tasks;
mod utils;

use clap::Parser;
use tracing::{debug, warn};

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    let loaded = Config::load();
    let cli = cli.with_config(&loaded.config);

    utils::logging::init(cli.debug);
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "Loaded config");
    }
    for (path, err) in &loaded.skipped {
        warn!(path = %path.display(), error = %err, "Failed to parse config file");
    }

    match app::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
