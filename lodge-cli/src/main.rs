//! Main entry point for the lodge CLI.
//!
//! This is the command-line interface for the vacation house booking
//! calendar. It provides one command per booking operation:
//! - `list`: List reservations
//! - `get`: Show one reservation
//! - `create`: Book a stay
//! - `update`: Change a reservation
//! - `delete`: Cancel a reservation

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use output::OutputFormat;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _ = lodge::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        output: cli.output,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Create(cmd) => cmd.execute(&global),
        cli::Command::Update(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Calendar(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if utils::error_output_format(&global) == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
