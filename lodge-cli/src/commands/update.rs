//! Update command implementation.
//!
//! Replaces the name and dates of an existing reservation. The reservation
//! keeps its id and creation time, and never conflicts with itself.

use crate::error::CliError;
use crate::output::print_reservation;
use crate::utils::{load_configuration, open_service, output_format, parse_id, GlobalOptions};
use clap::Args;
use lodge::BookingRequest;

/// Change an existing reservation.
#[derive(Args)]
pub struct UpdateCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Occupant name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// First booked day
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last booked day
    #[arg(long, value_name = "DATE")]
    pub end: String,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = parse_id(&self.id)?;
        let request = BookingRequest::new(self.name, self.start, self.end);

        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let reservation = service.update(id, &request)?;

        if !global.quiet {
            eprintln!("Updated reservation #{id}");
        }

        print_reservation(&reservation, output_format(global, &config))
    }
}
