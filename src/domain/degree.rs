//! Degree model.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A degree offering in the university catalog.
///
/// Immutable once built; identity is the catalog `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// Catalog identifier.
    pub id: String,
    /// Degree acronym, e.g. `"MEIC"`.
    pub acronym: String,
    /// Full degree name.
    pub name: String,
    /// Academic terms in which this degree is offered.
    pub academic_terms: Vec<String>,
}

impl Degree {
    /// Name shown in pickers: `"<acronym> - <name>"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.acronym, self.name)
    }

    /// Sort order for degree listings (by display name).
    #[must_use]
    pub fn compare(a: &Degree, b: &Degree) -> Ordering {
        a.display_name().cmp(&b.display_name())
    }
}
