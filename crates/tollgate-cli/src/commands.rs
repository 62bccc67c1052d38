//! Command handlers

use std::io::{self, Write};

use tollgate_app::{Config, TollBooth};
use tollgate_domain::service::generate_rate_table;
use tollgate_types::Result;

use crate::cli::{Cli, Commands};
use crate::menu::Menu;

/// Layer command-line flags over the default configuration
pub fn build_config(cli: &Cli) -> Config {
    Config::default()
        .with_currency_symbol(cli.currency.clone())
        .with_verbose(cli.verbose)
        .with_summary_on_exit(cli.summary_on_exit)
}

/// Execute CLI command
pub fn execute(cli: Cli, config: &Config) -> Result<()> {
    tracing::debug!(currency = %config.currency_symbol, "configuration loaded");

    match cli.command {
        None | Some(Commands::Menu) => cmd_menu(config),
        Some(Commands::Rates) => cmd_rates(config),
        Some(Commands::Config) => cmd_config(config),
    }
}

fn cmd_menu(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut booth = TollBooth::new();

    Menu::new(stdin.lock(), stdout.lock(), &config.currency_symbol).run(&mut booth)?;

    if config.summary_on_exit {
        println!("\n{}", booth.report(&config.currency_symbol));
    }
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config);
    Ok(())
}

fn cmd_rates(config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Flat toll tax per vehicle")?;
    writeln!(out, "=========================")?;
    write!(out, "{}", generate_rate_table(&config.currency_symbol))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_config_from_flags() {
        let cli = Cli::try_parse_from([
            "tollgate",
            "--currency",
            "£",
            "--summary-on-exit",
            "-v",
        ])
        .unwrap();
        let config = build_config(&cli);
        assert_eq!(config.currency_symbol, "£");
        assert!(config.verbose);
        assert!(config.summary_on_exit);
    }

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::try_parse_from(["tollgate", "config"]).unwrap();
        assert_eq!(build_config(&cli), Config::default());
    }
}
