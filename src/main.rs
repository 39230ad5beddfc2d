//! Binary entrypoint for the `timetabler` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match timetabler::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
