//! Runtime configuration for tollgate
//!
//! Nothing is read from disk or the environment; values come from
//! command-line flags on top of these defaults.

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Symbol prefixed to currency amounts
    pub currency_symbol: String,

    /// Emit debug-level log events on stderr
    pub verbose: bool,

    /// Print the full ledger report when the menu exits
    pub summary_on_exit: bool,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            verbose: false,
            summary_on_exit: false,
        }
    }
}

impl Config {
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_summary_on_exit(mut self, enabled: bool) -> Self {
        self.summary_on_exit = enabled;
        self
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tollgate Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Currency symbol: {}", self.currency_symbol)?;
        writeln!(f, "Verbose:         {}", self.verbose)?;
        writeln!(f, "Summary on exit: {}", self.summary_on_exit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.verbose);
        assert!(!config.summary_on_exit);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_currency_symbol("€")
            .with_verbose(true)
            .with_summary_on_exit(true);
        assert_eq!(config.currency_symbol, "€");
        assert!(config.verbose);
        assert!(config.summary_on_exit);
        assert!(config.to_string().contains("Currency symbol: €"));
    }
}
