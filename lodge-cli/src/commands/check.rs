//! Command to check whether a period is free.
//!
//! The answer is advisory: another booking can still take the period
//! before a later `create` runs. Exits with status 1 when the period is
//! blocked, so scripts can branch on it.

use crate::error::CliError;
use crate::output::{write_json, OutputFormat};
use crate::utils::{load_configuration, open_service, output_format, parse_id, GlobalOptions};
use clap::Args;
use lodge::availability::{first_blocked_day, occupant_on};
use lodge::{CalendarDate, Reservation, Stay};
use serde::Serialize;

/// Check whether a period is free.
#[derive(Args)]
pub struct CheckCommand {
    /// First day of the period
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last day of the period
    #[arg(long, value_name = "DATE")]
    pub end: String,

    /// Ignore this reservation (when checking a change to it)
    #[arg(long, value_name = "ID")]
    pub exclude: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Availability {
    #[serde(flatten)]
    stay: Stay,
    available: bool,
    first_blocked_day: Option<CalendarDate>,
    conflict: Option<Reservation>,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse input
        let stay = Stay::parse(&self.start, &self.end)?;
        let exclude = self.exclude.as_deref().map(parse_id).transpose()?;

        // 2. Open the service
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        // 3. Look for reservations in the way
        let mut holders = service.list_between(&stay)?;
        holders.retain(|r| Some(r.id()) != exclude);
        let blocked_from = first_blocked_day(&holders, &stay, None);
        let conflict = blocked_from
            .and_then(|day| occupant_on(&holders, day))
            .cloned();

        let report = Availability {
            stay,
            available: blocked_from.is_none(),
            first_blocked_day: blocked_from,
            conflict,
        };

        // 4. Report
        if output_format(global, &config) == OutputFormat::Json {
            write_json(&report)?;
        } else if report.available {
            println!("{stay} is available");
        } else if let Some(day) = report.first_blocked_day {
            println!("{stay} is blocked from {day}");
        }

        // 5. Exit status
        match (report.first_blocked_day, report.conflict) {
            (None, _) => Ok(()),
            (Some(day), Some(holder)) => Err(CliError::SemanticFailure(format!(
                "{stay} is not available: {day} is held by reservation #{} ({})",
                holder.id(),
                holder.name()
            ))),
            (Some(day), None) => Err(CliError::SemanticFailure(format!(
                "{stay} is not available from {day}"
            ))),
        }
    }
}
