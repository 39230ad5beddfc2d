//! `timetabler restore` — rebuild a timetable from a shareable string.

use crate::codec;
use crate::context::ServiceContext;
use crate::domain::AcademicTerm;
use crate::ports::store;

/// Decodes a shareable state string against the live catalog, prints the
/// reconstructed timetable and saves it as the active one.
///
/// Partial failures do not abort the restore; every group that could not
/// be resolved is reported after the best-effort result.
///
/// # Errors
///
/// Returns an error string when the input is not a valid encoded
/// timetable or the result cannot be persisted.
pub async fn run(ctx: &ServiceContext, state: &str) -> Result<(), String> {
    let (timetable, errors) =
        codec::restore_timetable(state, ctx.catalog.as_ref(), &ctx.cache).await?;

    let name = if timetable.name().is_empty() { "(unnamed)" } else { timetable.name() };
    println!("Timetable: {name}");
    println!("Term: {}", AcademicTerm::lenient(timetable.academic_term()));
    if !timetable.degree_acronyms().is_empty() {
        let degrees: Vec<&str> =
            timetable.degree_acronyms().iter().map(String::as_str).collect();
        println!("Degrees: {}", degrees.join(", "));
    }
    println!("Multi-shift: {}", timetable.multi_shift_mode());

    for entry in timetable.courses_with_shift_types() {
        println!("  {}", entry.course.display_name(true));
    }
    for shift in timetable.selected_shifts() {
        println!("    {} [{}/{}]", shift.label(), shift.occupation.current, shift.occupation.max);
    }

    if !errors.is_empty() {
        eprintln!("Some selections could not be restored: {errors}");
    }

    ctx.store
        .set(store::KEY_ACTIVE_TIMETABLE, &codec::compose_share_string(&timetable))
        .map_err(|e| format!("failed to save timetable: {e}"))?;
    ctx.store
        .set(store::KEY_TERM, timetable.academic_term())
        .map_err(|e| format!("failed to save term: {e}"))?;
    let colors = serde_json::to_string(timetable.course_colors())
        .map_err(|e| format!("failed to serialize colors: {e}"))?;
    ctx.store
        .set(store::KEY_COLORS, &colors)
        .map_err(|e| format!("failed to save colors: {e}"))?;
    Ok(())
}
