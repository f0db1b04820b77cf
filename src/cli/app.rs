//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::tui;
use crate::config::Config;
use crate::domain::{Priority, PriorityFilter};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(author, version, about = "A single-screen terminal task list")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "TASKLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial priority filter: all, high, medium, low, none or 1-4
    #[arg(long, global = true)]
    pub filter: Option<PriorityFilter>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the task list (default)
    Tui,

    /// List the priority levels with their ranks
    Priorities,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("tasklist starting");

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    output.verbose_ctx("config", &format!("{:?}", config.tui));

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let filter = cli.filter.unwrap_or(config.tui.default_filter);
            output.verbose_ctx("tui", &format!("Initial filter: {}", filter));
            tui::run(&output, &config.tui, filter)?
        }
        Commands::Priorities => priorities(&output),
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Prints the priority table
fn priorities(output: &Output) {
    if output.is_json() {
        let items: Vec<_> = Priority::ALL
            .iter()
            .map(|p| {
                serde_json::json!({
                    "label": p.label(),
                    "rank": p.rank(),
                })
            })
            .collect();
        output.data(&items);
    } else {
        output.row(&["RANK", "LABEL"]);
        for p in Priority::ALL {
            output.row(&[&p.rank().to_string(), p.label()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.filter.is_none());
    }

    #[test]
    fn parses_filter_flag() {
        let cli = Cli::try_parse_from(["tasklist", "--filter", "medium"]).unwrap();
        assert_eq!(cli.filter, Some(PriorityFilter::Only(Priority::Medium)));

        let cli = Cli::try_parse_from(["tasklist", "tui", "--filter", "all"]).unwrap();
        assert_eq!(cli.filter, Some(PriorityFilter::All));
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["tasklist", "--filter", "urgent"]).is_err());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tasklist", "priorities", "-f", "json", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Priorities)));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }
}
