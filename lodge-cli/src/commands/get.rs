//! Show a single reservation.

use crate::error::CliError;
use crate::output::print_reservation;
use crate::utils::{load_configuration, open_service, output_format, parse_id, GlobalOptions};
use clap::Args;

/// Show one reservation by id.
#[derive(Args)]
pub struct GetCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = parse_id(&self.id)?;

        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let reservation = service.get(id)?;
        print_reservation(&reservation, output_format(global, &config))
    }
}
