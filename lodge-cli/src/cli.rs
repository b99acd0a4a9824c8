//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CalendarCommand, CheckCommand, CompletionsCommand, CreateCommand, DeleteCommand, GetCommand,
    ListCommand, UpdateCommand,
};
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking a vacation house.
#[derive(Parser)]
#[command(name = "lodge")]
#[command(version, about = "Book stays in a shared vacation house", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LODGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "LODGE_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "LODGE_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Output format
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List reservations
    List(ListCommand),

    /// Show one reservation
    Get(GetCommand),

    /// Book a new stay
    Create(CreateCommand),

    /// Change an existing reservation
    Update(UpdateCommand),

    /// Cancel a reservation
    Delete(DeleteCommand),

    /// Check whether a period is free
    Check(CheckCommand),

    /// Show the occupancy of a month
    Calendar(CalendarCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
