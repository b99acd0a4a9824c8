//! Library exports for lodge-cli.
//!
//! This module exports the CLI structure so it can be inspected from tests
//! and used to generate completions and documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
