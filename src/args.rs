//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// Geodex: a country directory for the terminal.
#[derive(Debug, Parser)]
#[command(name = "geodex", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand; defaults to listing all countries.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List countries, optionally filtered by region and search text
    List {
        /// Keep only countries in this exact region (e.g., "Europe")
        #[arg(long)]
        region: Option<String>,
        /// Keep only countries whose name, capital or native name contains
        /// this text (case-insensitive); matched names are marked
        #[arg(long)]
        search: Option<String>,
        /// Skip the cache and refetch the dataset
        #[arg(long)]
        refresh: bool,
    },
    /// Show the detail view for one country
    Show {
        /// Country code: alpha-3, alpha-2 or Olympic-style
        code: Option<String>,
        /// Skip the cache and refetch the dataset
        #[arg(long)]
        refresh: bool,
    },
    /// Print the distinct regions available for filtering
    Regions,
    /// Print or toggle the persisted theme preference
    Theme {
        /// Flip between light and dark and persist the result
        #[arg(long)]
        toggle: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The derive parses the documented surfaces.
    ///
    /// Inputs:
    /// - Representative argument vectors for each subcommand.
    ///
    /// Output:
    /// - Matching `Command` variants with the expected fields.
    fn cli_parses_subcommands() {
        let cli = Cli::parse_from(["geodex"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["geodex", "list", "--region", "Europe", "--search", "man"]);
        match cli.command {
            Some(Command::List {
                region,
                search,
                refresh,
            }) => {
                assert_eq!(region.as_deref(), Some("Europe"));
                assert_eq!(search.as_deref(), Some("man"));
                assert!(!refresh);
            }
            other => panic!("expected list, got {other:?}"),
        }

        let cli = Cli::parse_from(["geodex", "show", "PER", "--refresh"]);
        match cli.command {
            Some(Command::Show { code, refresh }) => {
                assert_eq!(code.as_deref(), Some("PER"));
                assert!(refresh);
            }
            other => panic!("expected show, got {other:?}"),
        }

        let cli = Cli::parse_from(["geodex", "show"]);
        match cli.command {
            Some(Command::Show { code, .. }) => assert!(code.is_none()),
            other => panic!("expected show, got {other:?}"),
        }
    }
}
