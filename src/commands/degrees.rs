//! `timetabler degrees` — list the degrees offered in a term.

use crate::context::ServiceContext;

/// Lists a term's degrees, one per line, caching the listing.
///
/// # Errors
///
/// Returns an error string when the catalog cannot be reached.
pub async fn run(ctx: &ServiceContext, term: &str) -> Result<(), String> {
    let cached = ctx
        .cache
        .lock()
        .ok()
        .and_then(|cache| cache.degrees(term).map(<[_]>::to_vec));
    let degrees = match cached {
        Some(degrees) => degrees,
        None => {
            let degrees = ctx
                .catalog
                .degrees(term)
                .await
                .map_err(|e| format!("cannot obtain degrees: {e}"))?;
            if let Ok(mut cache) = ctx.cache.lock() {
                cache.store_degrees(term, degrees.clone());
            }
            degrees
        }
    };

    if degrees.is_empty() {
        println!("No degrees found for {term}");
        return Ok(());
    }
    for degree in &degrees {
        println!("{}  {}", degree.id, degree.display_name());
    }
    Ok(())
}
