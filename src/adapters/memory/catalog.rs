//! In-memory adapter for the `CatalogSource` port.
//!
//! Serves fixture entities, and can simulate transport failures per
//! course, for deterministic tests and offline use.

use std::collections::{HashMap, HashSet};

use crate::domain::{Course, Degree, Shift};
use crate::ports::catalog::{CatalogFuture, CatalogSource};

/// Catalog fixture serving preloaded entities.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    degrees: Vec<Degree>,
    courses: HashMap<String, Course>,
    schedules: HashMap<String, Vec<Shift>>,
    failing_schedules: HashSet<String>,
}

impl MemoryCatalog {
    /// Creates an empty fixture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a degree.
    #[must_use]
    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.degrees.push(degree);
        self
    }

    /// Adds a course together with its schedule.
    #[must_use]
    pub fn with_course(mut self, course: Course, shifts: Vec<Shift>) -> Self {
        self.schedules.insert(course.id.clone(), shifts);
        self.courses.insert(course.id.clone(), course);
        self
    }

    /// Makes schedule fetches for the given course id fail, simulating a
    /// catalog outage for that course.
    #[must_use]
    pub fn with_failing_schedule(mut self, course_id: &str) -> Self {
        self.failing_schedules.insert(course_id.to_string());
        self
    }
}

impl CatalogSource for MemoryCatalog {
    fn degrees(&self, _term: &str) -> CatalogFuture<'_, Vec<Degree>> {
        let mut degrees = self.degrees.clone();
        degrees.sort_by(Degree::compare);
        Box::pin(async move { Ok(degrees) })
    }

    fn courses(&self, degree: &Degree, _term: &str) -> CatalogFuture<'_, Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .values()
            .filter(|course| course.degree_acronym == degree.acronym)
            .cloned()
            .collect();
        courses.sort_by(Course::compare);
        Box::pin(async move { Ok(courses) })
    }

    fn course(&self, course_id: &str, _term: &str) -> CatalogFuture<'_, Option<Course>> {
        let course = self.courses.get(course_id).cloned();
        Box::pin(async move { Ok(course) })
    }

    fn course_schedules(
        &self,
        course: &Course,
        _term: &str,
    ) -> CatalogFuture<'_, Option<Vec<Shift>>> {
        if self.failing_schedules.contains(&course.id) {
            let message = format!("simulated schedule failure for {}", course.id);
            return Box::pin(async move { Err(message.into()) });
        }
        let shifts = self.schedules.get(&course.id).cloned();
        Box::pin(async move { Ok(shifts) })
    }
}
