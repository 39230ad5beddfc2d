//! `timetabler share` — print the shareable URL for the saved timetable.

use std::env;

use crate::context::ServiceContext;
use crate::ports::store;

/// Environment variable naming the public app URL the link points at.
pub const APP_URL_VAR: &str = "TIMETABLER_APP_URL";

const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// Prints the shareable URL for the stored active timetable.
///
/// # Errors
///
/// Returns an error string when no timetable has been saved yet or the
/// store cannot be read.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let state = ctx
        .store
        .get(store::KEY_ACTIVE_TIMETABLE)
        .map_err(|e| format!("failed to read saved timetable: {e}"))?
        .ok_or_else(|| "no saved timetable; run `timetabler restore` first".to_string())?;

    let app_url = env::var(APP_URL_VAR).unwrap_or_else(|_| DEFAULT_APP_URL.to_string());
    println!("{app_url}?{state}");
    Ok(())
}
