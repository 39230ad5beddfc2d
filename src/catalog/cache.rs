//! Per-term cache of resolved catalog entities.
//!
//! An explicit cache object passed through the service context, replacing
//! the module-level singletons of earlier designs. Entries are keyed by
//! academic term so switching terms never serves stale entities, and a
//! whole term can be invalidated at once.

use std::collections::HashMap;

use crate::domain::{Course, Degree};

/// Caches degree listings and resolved courses per academic term.
#[derive(Debug, Default)]
pub struct CatalogCache {
    degrees: HashMap<String, Vec<Degree>>,
    courses: HashMap<(String, String), Course>,
}

impl CatalogCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached degree listing for a term, if any.
    #[must_use]
    pub fn degrees(&self, term: &str) -> Option<&[Degree]> {
        self.degrees.get(term).map(Vec::as_slice)
    }

    /// Stores a term's degree listing.
    pub fn store_degrees(&mut self, term: &str, degrees: Vec<Degree>) {
        self.degrees.insert(term.to_string(), degrees);
    }

    /// The cached course for `(term, course_id)`, if any.
    #[must_use]
    pub fn course(&self, term: &str, course_id: &str) -> Option<&Course> {
        self.courses.get(&(term.to_string(), course_id.to_string()))
    }

    /// Stores a resolved course under its term.
    pub fn store_course(&mut self, term: &str, course: Course) {
        self.courses.insert((term.to_string(), course.id.clone()), course);
    }

    /// Drops everything cached for one term.
    pub fn invalidate(&mut self, term: &str) {
        self.degrees.remove(term);
        self.courses.retain(|(t, _), _| t != term);
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogCache;
    use crate::domain::{course, Course, Degree};

    const TERM: &str = "2º Semestre 2019/2020";

    fn sample_course(id: &str) -> Course {
        Course {
            id: id.to_string(),
            acronym: "CDI-I".to_string(),
            name: "Calculus I".to_string(),
            abbreviation: course::derive_abbreviation("Calculus I"),
            degree_acronym: "LEIC".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn stores_and_serves_per_term() {
        let mut cache = CatalogCache::new();
        cache.store_course(TERM, sample_course("1971"));
        assert!(cache.course(TERM, "1971").is_some());
        assert!(cache.course("1º Semestre 2019/2020", "1971").is_none());
        assert!(cache.course(TERM, "2042").is_none());
    }

    #[test]
    fn invalidate_drops_only_one_term() {
        let other_term = "1º Semestre 2019/2020";
        let mut cache = CatalogCache::new();
        cache.store_course(TERM, sample_course("1971"));
        cache.store_course(other_term, sample_course("1971"));
        cache.store_degrees(
            TERM,
            vec![Degree {
                id: "d1".to_string(),
                acronym: "LEIC".to_string(),
                name: "Informatics".to_string(),
                academic_terms: vec![TERM.to_string()],
            }],
        );

        cache.invalidate(TERM);
        assert!(cache.course(TERM, "1971").is_none());
        assert!(cache.degrees(TERM).is_none());
        assert!(cache.course(other_term, "1971").is_some());
    }
}
