//! Core library for the `timetabler` CLI.
//!
//! Implements the selection core of a university timetable assembler:
//! normalizing catalog payloads into a typed domain model, an immutable
//! timetable state machine, a compact shareable selection codec, and a
//! greedy minimal class cover. External systems (the catalog API, host
//! persistent storage) sit behind port traits in [`ports`], with live and
//! in-memory adapters in [`adapters`].

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod codec;
pub mod color;
pub mod commands;
pub mod context;
pub mod cover;
pub mod domain;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["timetabler", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_missing_args() {
        let result = run(["timetabler", "courses"]);
        assert!(result.is_err());
    }
}
