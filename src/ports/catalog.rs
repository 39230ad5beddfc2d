//! Catalog port for university catalog lookups.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use crate::domain::{Course, Degree, Shift};

/// Boxed future type alias used by [`CatalogSource`] to keep the trait
/// dyn-compatible.
pub type CatalogFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Resolves degrees, courses and schedules from the university catalog.
///
/// Every lookup is scoped to an academic term; the same id can name
/// different entities across terms.
pub trait CatalogSource: Send + Sync {
    /// Lists the degrees offered in the given term, sorted by acronym.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be reached or answers
    /// with something other than a degree list.
    fn degrees(&self, term: &str) -> CatalogFuture<'_, Vec<Degree>>;

    /// Lists the courses of a degree in the given term, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be reached or answers
    /// with something other than a course list.
    fn courses(&self, degree: &Degree, term: &str) -> CatalogFuture<'_, Vec<Course>>;

    /// Resolves a single course by catalog id. `Ok(None)` means the
    /// catalog has no course under that id in the given term.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; an unknown id is not an
    /// error.
    fn course(&self, course_id: &str, term: &str) -> CatalogFuture<'_, Option<Course>>;

    /// Fetches every shift of a course's schedule. `Ok(None)` means the
    /// catalog has no schedule for the course in the given term.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; a missing schedule is not
    /// an error.
    fn course_schedules(&self, course: &Course, term: &str)
        -> CatalogFuture<'_, Option<Vec<Shift>>>;
}
