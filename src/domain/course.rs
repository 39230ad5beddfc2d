//! Course model and its derived identity rules.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Roman-numeral suffixes used to disambiguate sequential courses,
/// longest-match first so `IV` is not read as `I`.
const ROMAN_SUFFIXES: [&str; 8] = ["VIII", "VII", "VI", "IV", "III", "II", "I", "V"];

/// A course belonging to a degree offering.
///
/// Immutable; presentation state such as color lives in the owning
/// [`Timetable`](super::Timetable), never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier.
    pub id: String,
    /// Derived acronym (see [`derive_acronym`]).
    pub acronym: String,
    /// Full course name.
    pub name: String,
    /// Initials of the capitalized words of the name.
    pub abbreviation: String,
    /// Acronym of the degree offering this course.
    pub degree_acronym: String,
    /// Catalog page for the course.
    pub url: String,
}

impl Course {
    /// Name shown in course listings, optionally tagged with the degree.
    #[must_use]
    pub fn display_name(&self, show_degree: bool) -> String {
        if !show_degree {
            return self.name.clone();
        }
        if self.degree_acronym.is_empty() {
            format!("{} (N/A)", self.name)
        } else {
            format!("{} ({})", self.name, self.degree_acronym)
        }
    }

    /// Concatenated searchable text for autocomplete matching.
    #[must_use]
    pub fn searchable_name(&self, show_degree: bool) -> String {
        let mut searchable = format!("{}{}{}", self.abbreviation, self.name, self.acronym);
        if show_degree {
            searchable.push_str(&self.degree_acronym);
        }
        searchable
    }

    /// Sort order for course listings (name, then degree acronym).
    #[must_use]
    pub fn compare(a: &Course, b: &Course) -> Ordering {
        a.name.cmp(&b.name).then_with(|| a.degree_acronym.cmp(&b.degree_acronym))
    }
}

/// Course identity is `(name, degree_acronym, id)`: two same-name courses
/// from different degree offerings stay distinct unless their ids match.
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.degree_acronym == other.degree_acronym
            && self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.degree_acronym.hash(state);
        self.id.hash(state);
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        Course::compare(self, other).then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Derives the course acronym from the raw catalog acronym and name.
///
/// Trailing non-letter characters are trimmed from the raw acronym. When
/// the course name ends with a roman-numeral token and the trimmed acronym
/// does not already carry an explicit suffix, the numeral is appended as
/// `-<numeral>` so sequential courses sharing a base acronym stay apart
/// (e.g. "Calculus I" vs "Calculus II"). Never fails on malformed input;
/// an explicit acronym suffix always wins over an inferred one.
#[must_use]
pub fn derive_acronym(raw_acronym: &str, name: &str) -> String {
    let trimmed = trim_trailing_non_letters(raw_acronym);
    match name_roman_suffix(name) {
        Some(suffix) if !has_explicit_suffix(trimmed) => format!("{trimmed}-{suffix}"),
        _ => trimmed.to_string(),
    }
}

/// Initials of the capitalized words of `name`, splitting on spaces,
/// hyphens and slashes. Uncased characters (digits) count as capitals.
#[must_use]
pub fn derive_abbreviation(name: &str) -> String {
    name.split([' ', '-', '/'])
        .filter_map(|word| word.chars().next())
        .filter(|c| !c.is_lowercase())
        .collect()
}

fn trim_trailing_non_letters(raw: &str) -> &str {
    raw.trim_end_matches(|c: char| !c.is_ascii_alphabetic())
}

/// The roman numeral ending `name` as a whitespace-separated token, if any.
fn name_roman_suffix(name: &str) -> Option<&'static str> {
    ROMAN_SUFFIXES
        .iter()
        .copied()
        .find(|suffix| name.strip_suffix(suffix).is_some_and(|rest| rest.ends_with(' ')))
}

/// Whether the acronym already ends with a roman numeral set off by a
/// non-letter character (e.g. `"CDI-II"`).
fn has_explicit_suffix(acronym: &str) -> bool {
    ROMAN_SUFFIXES.iter().any(|suffix| {
        acronym
            .strip_suffix(suffix)
            .is_some_and(|rest| rest.chars().last().is_some_and(|c| !c.is_ascii_alphabetic()))
    })
}
