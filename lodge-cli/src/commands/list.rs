//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! ordered by start date in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::output::print_reservations;
use crate::utils::{load_configuration, open_service, output_format, GlobalOptions};
use clap::Args;
use lodge::Stay;

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Only show reservations holding a day on or after this date
    #[arg(long, value_name = "DATE", requires = "to")]
    pub from: Option<String>,

    /// Only show reservations holding a day on or before this date
    #[arg(long, value_name = "DATE", requires = "from")]
    pub to: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate the window before touching the database
        let window = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(Stay::parse(&from, &to)?),
            _ => None,
        };

        // 2. Load configuration and open the service
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        // 3. Query reservations
        let reservations = match window {
            Some(ref window) => service.list_between(window)?,
            None => service.list()?,
        };

        // 4. Format and output to stdout
        print_reservations(&reservations, output_format(global, &config))
    }
}
