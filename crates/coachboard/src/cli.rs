//! Command-line interface definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coachboard",
    about = "Fitness coaching administration dashboard",
    long_about = "Administrative dashboard for a fitness-coaching business: \
clients, appointments, leads, check-ins, reminders and client app requests.\n\
Runs as a full-screen TUI by default; headless subcommands print the same \
list views to stdout.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the dashboard TUI (default)
    Tui {
        /// Start on a specific screen, e.g. /checkins/submitted
        #[arg(long)]
        path: Option<String>,
    },

    /// Print a list view to stdout
    List {
        /// Record domain (see `coachboard list --help` for names)
        #[arg(value_name = "DOMAIN")]
        domain: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the summary statistics of a list view
    Stats {
        #[arg(value_name = "DOMAIN")]
        domain: String,
    },

    /// Print the route table
    Routes,

    /// Export a (optionally filtered) list view to CSV
    Export {
        #[arg(value_name = "DOMAIN")]
        domain: String,

        /// Destination file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Filter flags shared by `list` and `export`; each maps to one engine
/// dimension and is ignored by pages without that dimension.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Case-insensitive substring search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Status filter (exact value, e.g. submitted, active, pending)
    #[arg(long)]
    pub status: Option<String>,

    /// Group filter (e.g. "Weight Loss")
    #[arg(long)]
    pub group: Option<String>,

    /// Label filter (e.g. "Needs Attention")
    #[arg(long)]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from([
            "coachboard",
            "list",
            "checkins",
            "--search",
            "sarah",
            "--status",
            "submitted",
        ]);
        match cli.command {
            Some(Command::List { domain, filters }) => {
                assert_eq!(domain, "checkins");
                assert_eq!(filters.search.as_deref(), Some("sarah"));
                assert_eq!(filters.status.as_deref(), Some("submitted"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_is_tui() {
        let cli = Cli::parse_from(["coachboard"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Cli::try_parse_from(["coachboard", "export", "leads"]).is_err());
    }
}
