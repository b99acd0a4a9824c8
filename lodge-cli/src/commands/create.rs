//! Create command implementation.
//!
//! This module implements the `create` command, which books the house for
//! a named occupant over a closed date range.

use crate::error::CliError;
use crate::output::print_reservation;
use crate::utils::{load_configuration, open_service, output_format, GlobalOptions};
use clap::Args;
use lodge::BookingRequest;

/// Book a new stay.
#[derive(Args)]
pub struct CreateCommand {
    /// Occupant name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// First booked day (YYYY-MM-DD or an RFC 3339 timestamp)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last booked day (YYYY-MM-DD or an RFC 3339 timestamp)
    #[arg(long, value_name = "DATE")]
    pub end: String,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate input before opening the database
        let request = BookingRequest::new(self.name, self.start, self.end);
        request.normalize()?;

        // 2. Load configuration and open the service
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        // 3. Book the stay
        let reservation = service.create(&request)?;

        if !global.quiet {
            eprintln!(
                "Booked reservation #{} for {}",
                reservation.id(),
                reservation.stay()
            );
        }

        print_reservation(&reservation, output_format(global, &config))
    }
}
