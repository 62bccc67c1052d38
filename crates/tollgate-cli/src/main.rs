//! Tollgate - toll-road vehicle registry
//!
//! A menu-driven console tool that records vehicles entering a toll point
//! and tracks the tax collected for the session.

mod cli;
mod commands;
mod logging;
mod menu;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let config = commands::build_config(&cli);
    logging::init_logging(config.verbose);

    if let Err(e) = commands::execute(cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
