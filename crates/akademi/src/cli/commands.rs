//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::content::ResourceKind;

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to bind to (overrides `server.bind_address`)
    #[arg(short, long)]
    pub bind: Option<IpAddr>,

    /// Port to listen on (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the JSON data files (overrides `storage.data_dir`)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Which content to print
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// Directory holding the JSON data files
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Seed command arguments.
#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Directory holding the JSON data files
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Content argument for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
    /// Training programmes
    Trainings,
    /// Client testimonials
    Testimonials,
    /// Frequently asked questions
    Faqs,
    /// Embedded LinkedIn posts
    #[value(name = "linkedin-contents", alias = "linkedin")]
    LinkedinContents,
    /// Contact details
    Contact,
}

impl From<ResourceArg> for ResourceKind {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Trainings => Self::Trainings,
            ResourceArg::Testimonials => Self::Testimonials,
            ResourceArg::Faqs => Self::Faqs,
            ResourceArg::LinkedinContents => Self::LinkedInContents,
            ResourceArg::Contact => Self::Contact,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_arg_conversion() {
        assert_eq!(
            ResourceKind::from(ResourceArg::Trainings),
            ResourceKind::Trainings
        );
        assert_eq!(
            ResourceKind::from(ResourceArg::LinkedinContents),
            ResourceKind::LinkedInContents
        );
        assert_eq!(ResourceKind::from(ResourceArg::Contact), ResourceKind::Contact);
    }

    #[test]
    fn test_resource_arg_names_match_routes() {
        for arg in ResourceArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, ResourceKind::from(*arg).to_string());
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_status_command_debug() {
        let cmd = StatusCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_output_format_debug() {
        let format = OutputFormat::Json;
        let debug_str = format!("{format:?}");
        assert_eq!(debug_str, "Json");
    }
}
