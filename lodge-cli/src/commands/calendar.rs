//! Calendar command implementation.
//!
//! Shows which days of a month are booked and by whom.

use crate::error::CliError;
use crate::output::print_month;
use crate::utils::{load_configuration, open_service, output_format, GlobalOptions};
use clap::Args;
use lodge::availability::{parse_month, MonthView};
use lodge::CalendarDate;

/// Show the occupancy of one month.
#[derive(Args)]
pub struct CalendarCommand {
    /// Month to show (default: the current month)
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<String>,
}

impl CalendarCommand {
    /// Execute the calendar command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (year, month) = match self.month {
            Some(ref raw) => parse_month(raw)?,
            None => {
                let today = CalendarDate::today();
                (today.year(), today.month())
            }
        };
        let window = MonthView::window(year, month)?;

        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let reservations = service.list_between(&window)?;
        let view = MonthView::build(year, month, &reservations)?;

        print_month(&view, output_format(global, &config))
    }
}
