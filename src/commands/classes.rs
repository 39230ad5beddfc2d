//! `timetabler classes` — which class to attend for each selected shift.

use crate::codec;
use crate::context::ServiceContext;
use crate::cover;

/// Decodes a shareable state string and prints the minimal-classes
/// report: the eligible classes per shift and the smallest covering set.
///
/// # Errors
///
/// Returns an error string when the input is not a valid encoded
/// timetable.
pub async fn run(ctx: &ServiceContext, state: &str) -> Result<(), String> {
    let (timetable, errors) =
        codec::restore_timetable(state, ctx.catalog.as_ref(), &ctx.cache).await?;

    let degrees: Vec<String> = timetable.degree_acronyms().iter().cloned().collect();
    let report = cover::minimal_classes(timetable.selected_shifts(), &degrees);

    if report.classes_by_shift.is_empty() {
        println!("No shifts selected");
    }
    for (shift_label, classes) in &report.classes_by_shift {
        println!("{shift_label}: {classes}");
    }
    if !report.minimal_classes.is_empty() {
        println!("Minimal classes: {}", report.minimal_classes.join(", "));
    }

    if !errors.is_empty() {
        eprintln!("Some selections could not be restored: {errors}");
    }
    Ok(())
}
