//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mail Badger dashboard client
#[derive(Parser, Debug)]
#[command(name = "mailbadger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file and MAILBADGER_URL)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Templates (continuation-token pagination)
    Templates {
        #[command(subcommand)]
        action: TemplateCommand,
    },

    /// Mailing lists (offset pagination)
    Lists {
        #[command(subcommand)]
        action: ListCommand,
    },

    /// Campaigns (offset pagination)
    Campaigns {
        #[command(subcommand)]
        action: CampaignCommand,
    },
}

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Print pages of templates, following next tokens
    List {
        /// Maximum number of pages to print
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Interactive pager: n(ext), p(revious), r(efresh), e(dit) <name>, d(elete) <name>, q(uit)
    Browse,

    /// Delete a template by name
    Delete {
        /// Template name
        name: String,
    },
}

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// Print one page of lists
    List {
        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u32,

        /// Items per page (capped at 100)
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Print one page of a list's subscribers
    Subscribers {
        /// List id
        id: i64,

        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u32,
    },

    /// Import subscribers from a CSV file
    Import {
        /// List id
        id: i64,

        /// CSV file with subscribers
        file: PathBuf,
    },
}

/// Campaign subcommands
#[derive(Subcommand, Debug)]
pub enum CampaignCommand {
    /// Print one page of campaigns
    List {
        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: u32,
    },

    /// Delete a campaign by id
    Delete {
        /// Campaign id
        id: i64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_templates_list() {
        let cli = Cli::parse_from([
            "mailbadger",
            "--url",
            "http://localhost:8080",
            "templates",
            "list",
            "--pages",
            "3",
        ]);
        assert_eq!(cli.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(
            cli.command,
            Commands::Templates {
                action: TemplateCommand::List { pages: 3 }
            }
        ));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mailbadger", "lists", "list", "--per-page", "50", "-f", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Lists {
                action: ListCommand::List {
                    page: 0,
                    per_page: Some(50)
                }
            }
        ));
    }

    #[test]
    fn test_parse_delete_requires_name() {
        assert!(Cli::try_parse_from(["mailbadger", "templates", "delete"]).is_err());
    }
}
