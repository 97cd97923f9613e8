// src/cli/commands.rs
use clap::{Parser, Subcommand};

/// Ultra profitability calculator - free vs. metered electricity mining report
#[derive(Parser, Debug)]
#[command(name = "ultra-profit-rs")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to print (defaults to the report)
    #[command(subcommand)]
    pub action: Option<Action>,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the profitability report
    Report,

    /// Print the built-in hardware profile and coin table as TOML
    Profile,
}

impl Commands {
    /// Action to run, the report when none was given
    pub fn action(&self) -> Action {
        self.action.unwrap_or(Action::Report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_report() {
        let cli = Commands::try_parse_from(["ultra-profit-rs"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.action(), Action::Report);
    }

    #[test]
    fn profile_subcommand_with_verbose() {
        let cli = Commands::try_parse_from(["ultra-profit-rs", "profile", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.action(), Action::Profile);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Commands::try_parse_from(["ultra-profit-rs", "mine"]).is_err());
    }
}
