//! `timetabler courses` — list the courses of a degree.

use crate::context::ServiceContext;

/// Lists a degree's courses for a term, one per line.
///
/// # Errors
///
/// Returns an error string when the degree is unknown or the catalog
/// cannot be reached.
pub async fn run(ctx: &ServiceContext, degree_id: &str, term: &str) -> Result<(), String> {
    let degrees = ctx
        .catalog
        .degrees(term)
        .await
        .map_err(|e| format!("cannot obtain degrees: {e}"))?;
    let degree = degrees
        .iter()
        .find(|d| d.id == degree_id || d.acronym == degree_id)
        .ok_or_else(|| format!("unknown degree: {degree_id}"))?;

    let courses = ctx
        .catalog
        .courses(degree, term)
        .await
        .map_err(|e| format!("cannot obtain courses for {}: {e}", degree.acronym))?;

    if courses.is_empty() {
        println!("No courses found for {} in {term}", degree.acronym);
        return Ok(());
    }
    for course in &courses {
        println!("{}  {} ({})", course.id, course.display_name(true), course.acronym);
    }
    Ok(())
}
