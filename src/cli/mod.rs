//! CLI module
//!
//! Command-line front end over the dashboard API.
//!
//! # Commands
//!
//! - `templates list` - Print pages of templates, following next tokens
//! - `templates browse` - Interactive pager with edit and delete actions
//! - `templates delete` - Delete one template
//! - `lists list|subscribers|import` - Mailing lists and their subscribers
//! - `campaigns list|delete` - Campaigns

mod commands;
mod runner;

pub use commands::{CampaignCommand, Cli, Commands, ListCommand, OutputFormat, TemplateCommand};
pub use runner::{Runner, EMPTY_TEMPLATES};
