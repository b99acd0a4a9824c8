//! Rendering of command results.
//!
//! Reservations are written as a tab-separated table, pretty JSON in the
//! booking API's wire form, or CSV/TSV with camelCase column headers.

use std::io::Write;

use clap::ValueEnum;
use lodge::availability::MonthView;
use lodge::Reservation;
use serde::Serialize;

use crate::error::CliError;
use crate::utils::format_timestamp;

/// Column headers for reservation output.
const COLUMN_HEADERS: [&str; 5] = ["id", "name", "startDate", "endDate", "createdAt"];

/// Column headers for calendar output.
const CALENDAR_HEADERS: [&str; 4] = ["date", "status", "reservationId", "name"];

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<lodge::config::OutputFormat> for OutputFormat {
    fn from(format: lodge::config::OutputFormat) -> Self {
        match format {
            lodge::config::OutputFormat::Table => Self::Table,
            lodge::config::OutputFormat::Json => Self::Json,
            lodge::config::OutputFormat::Csv => Self::Csv,
            lodge::config::OutputFormat::Tsv => Self::Tsv,
        }
    }
}

/// Print a list of reservations.
pub fn print_reservations(
    reservations: &[Reservation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => reservations_as_table(reservations),
        OutputFormat::Json => write_json(&reservations),
        OutputFormat::Csv => reservations_as_delimited(reservations, b','),
        OutputFormat::Tsv => reservations_as_delimited(reservations, b'\t'),
    }
}

/// Print a single reservation. JSON output is a bare object, not an array.
pub fn print_reservation(reservation: &Reservation, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(reservation),
        other => print_reservations(std::slice::from_ref(reservation), other),
    }
}

/// Print the day-by-day occupancy of a month.
pub fn print_month(view: &MonthView, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => month_as_table(view),
        OutputFormat::Json => write_json(view),
        OutputFormat::Csv => month_as_delimited(view, b','),
        OutputFormat::Tsv => month_as_delimited(view, b'\t'),
    }
}

/// Write any serializable value to stdout as pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, value)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(handle)?;

    Ok(())
}

fn reservations_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.name(),
            res.start_date(),
            res.end_date(),
            format_timestamp(res.created_at()),
        )?;
    }

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

fn reservations_as_delimited(reservations: &[Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for res in reservations {
        writer
            .write_record([
                res.id().to_string(),
                res.name().to_string(),
                res.start_date().to_string(),
                res.end_date().to_string(),
                res.created_at().to_rfc3339(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

fn month_as_table(view: &MonthView) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(
        handle,
        "{}-{:02}: {} of {} days booked",
        view.year(),
        view.month(),
        view.booked_days(),
        view.days().len()
    )?;
    writeln!(handle, "DATE\tSTATUS\tRESERVATION")?;

    for day in view.days() {
        match day.booked_by {
            Some(ref occupant) => writeln!(
                handle,
                "{}\tbooked\t#{} {}",
                day.date, occupant.id, occupant.name
            )?,
            None => writeln!(handle, "{}\tfree\t-", day.date)?,
        }
    }

    Ok(())
}

fn month_as_delimited(view: &MonthView, delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(stdout.lock());

    writer.write_record(CALENDAR_HEADERS).map_err(csv_error)?;
    for day in view.days() {
        let (status, id, name) = match day.booked_by {
            Some(ref occupant) => ("booked", occupant.id.to_string(), occupant.name.clone()),
            None => ("free", String::new(), String::new()),
        };
        writer
            .write_record([day.date.to_string(), status.to_string(), id, name])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
