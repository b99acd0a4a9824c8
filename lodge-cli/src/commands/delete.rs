//! Delete command implementation.

use crate::error::CliError;
use crate::output::{write_json, OutputFormat};
use crate::utils::{load_configuration, open_service, output_format, parse_id, GlobalOptions};
use clap::Args;

/// Cancel a reservation, freeing its days.
#[derive(Args)]
pub struct DeleteCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = parse_id(&self.id)?;

        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        service.delete(id)?;

        if output_format(global, &config) == OutputFormat::Json {
            write_json(&serde_json::json!({ "deleted": id }))?;
        } else if !global.quiet {
            eprintln!("Deleted reservation #{id}");
        }

        Ok(())
    }
}
