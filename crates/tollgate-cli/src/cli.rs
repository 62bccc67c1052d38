//! CLI definition using clap

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tollgate")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Toll-road vehicle registry with per-category flat tax")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Currency symbol used when printing amounts
    #[arg(long, global = true, default_value = "$")]
    pub currency: String,

    /// Print the full ledger report when the menu exits
    #[arg(long, global = true)]
    pub summary_on_exit: bool,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Show the flat tax charged per vehicle category
    Rates,

    /// Show the effective configuration
    Config,
}
