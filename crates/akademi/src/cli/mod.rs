//! Command-line interface for akademi.
//!
//! This module provides the CLI structure and command handlers for the
//! `akademi` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, ListCommand, OutputFormat, ResourceArg, SeedCommand, ServeCommand,
    StatusCommand,
};

/// akademi - Content API for the Derin Akademi website
///
/// Serves trainings, testimonials, FAQs, LinkedIn posts and contact details
/// from flat JSON files, and inspects or seeds those files from the shell.
#[derive(Debug, Parser)]
#[command(name = "akademi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeCommand),

    /// Print the stored records of one resource
    List(ListCommand),

    /// Show data directory and record counts
    Status(StatusCommand),

    /// Write the default site content into missing data files
    Seed(SeedCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
