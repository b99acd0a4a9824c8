//! Build script for lodge-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn booking_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Occupant name")
                .required(true),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("DATE")
                .help("First booked day")
                .required(true),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .value_name("DATE")
                .help("Last booked day")
                .required(true),
        )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .value_name("ID")
        .help("Reservation id")
        .required(true)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("lodge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book stays in a shared vacation house")
        .long_about(
            "Command-line tool for booking a vacation house. Stays are closed date \
             ranges; two stays may not share any day, including a shared \
             arrival/departure day.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("LODGE_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("LODGE_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("LODGE_DISABLE_AUTOINIT"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output format")
                .value_name("FORMAT")
                .value_parser(["table", "json", "csv", "tsv"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List reservations")
                .long_about("List reservations ordered by start date")
                .arg(Arg::new("from").long("from").value_name("DATE"))
                .arg(Arg::new("to").long("to").value_name("DATE")),
            Command::new("get")
                .about("Show one reservation")
                .arg(id_arg()),
            booking_args(Command::new("create"))
                .about("Book a new stay")
                .long_about("Book the house for a named occupant over a closed date range"),
            booking_args(Command::new("update"))
                .about("Change an existing reservation")
                .arg(id_arg()),
            Command::new("delete")
                .about("Cancel a reservation")
                .arg(id_arg()),
            Command::new("check")
                .about("Check whether a period is free")
                .long_about("Report whether a period is free; exits with status 1 when it is not")
                .arg(Arg::new("start").long("start").value_name("DATE").required(true))
                .arg(Arg::new("end").long("end").value_name("DATE").required(true))
                .arg(Arg::new("exclude").long("exclude").value_name("ID")),
            Command::new("calendar")
                .about("Show the occupancy of a month")
                .arg(Arg::new("month").long("month").value_name("YYYY-MM")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var("OUT_DIR").map_err(|e| std::io::Error::other(e.to_string()))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("lodge.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
