//! Shift model: one weekly-recurring class section of a course.

use serde::{Deserialize, Serialize};

use super::{Course, Lesson};

/// The kind of class section a shift represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Lecture (`T`).
    Theoretical,
    /// Mixed lecture/practice (`TP`).
    TheoreticalPractical,
    /// Problem-solving class (`PB`).
    ProblemClass,
    /// Practical class (`P`).
    Practical,
    /// Laboratory (`L`).
    Lab,
    /// Seminar (`S`).
    Seminar,
}

impl ShiftType {
    /// Decodes the raw catalog type string, e.g. `"LABORATORIAL"`.
    #[must_use]
    pub fn from_catalog(raw: &str) -> Option<Self> {
        match raw {
            "TEORICA" => Some(Self::Theoretical),
            "TEORICO_PRATICA" => Some(Self::TheoreticalPractical),
            "PROBLEMS" => Some(Self::ProblemClass),
            "PRATICA" => Some(Self::Practical),
            "LABORATORIAL" => Some(Self::Lab),
            "SEMINARY" => Some(Self::Seminar),
            _ => None,
        }
    }

    /// Short letter code used in shift ids and exports.
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Self::Theoretical => "T",
            Self::TheoreticalPractical => "TP",
            Self::ProblemClass => "PB",
            Self::Practical => "P",
            Self::Lab => "L",
            Self::Seminar => "S",
        }
    }
}

/// Enrollment numbers for a shift.
///
/// Carried through from the catalog unvalidated; `current > max` happens
/// in real data and display code must tolerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    /// Students currently enrolled.
    pub current: u32,
    /// Enrollment cap.
    pub max: u32,
}

/// A shift of a course, holding its weekly lessons.
///
/// Identity is `(course.id, name)`. Immutable; occupancy refreshes go
/// through [`Timetable::update_occupancies`](super::Timetable::update_occupancies),
/// which substitutes whole shifts instead of mutating them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    /// The course this shift belongs to.
    pub course: Course,
    /// Raw shift name from the catalog, e.g. `"CDI2T07"`.
    pub name: String,
    /// Decoded section type.
    pub shift_type: ShiftType,
    /// Short id parsed from the name, e.g. `"T07"`.
    pub shift_id: String,
    /// Weekly lessons, deduplicated.
    pub lessons: Vec<Lesson>,
    /// Every lesson the catalog reported, duplicates included.
    pub all_lessons: Vec<Lesson>,
    /// Campus of the shift's first room, when known.
    pub campus: String,
    /// Enrollment numbers.
    pub occupation: Occupation,
    /// Names of the enrolled classes attending this shift.
    pub classes: Vec<String>,
}

impl Shift {
    /// Whether `self` and `other` are the same shift instance
    /// (same course id and name).
    #[must_use]
    pub fn same_shift(&self, other: &Shift) -> bool {
        self.name == other.name && self.course.id == other.course.id
    }

    /// The "conflicting sibling" relation: same course and type but a
    /// different instance. Drives replacement in single-shift mode.
    #[must_use]
    pub fn is_same_course_and_type(a: &Shift, b: &Shift) -> bool {
        a.course.name == b.course.name
            && a.shift_type == b.shift_type
            && a.name != b.name
            && a.course.id == b.course.id
    }

    /// The id persisted in encoded selections.
    #[must_use]
    pub fn stored_id(&self) -> &str {
        &self.name
    }

    /// `(course id, stored id)` pair identifying this shift globally.
    #[must_use]
    pub fn full_id(&self) -> (&str, &str) {
        (&self.course.id, &self.name)
    }

    /// Display label, e.g. `"CDI-I - T07"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.course.acronym, self.shift_id)
    }
}

impl PartialEq for Shift {
    fn eq(&self, other: &Self) -> bool {
        self.same_shift(other)
    }
}

impl Eq for Shift {}

/// The two-digit section number ending a shift name, per the
/// `<prefix><2-digit-number>` convention. `None` when the name does not
/// follow the convention.
#[must_use]
pub fn shift_number(name: &str) -> Option<&str> {
    let (idx, _) = name.char_indices().rev().nth(1)?;
    let suffix = &name[idx..];
    (idx > 0 && suffix.len() == 2 && suffix.chars().all(|c| c.is_ascii_digit()))
        .then_some(suffix)
}

#[cfg(test)]
mod tests {
    use super::{shift_number, ShiftType};

    #[test]
    fn decodes_catalog_types() {
        assert_eq!(ShiftType::from_catalog("TEORICA"), Some(ShiftType::Theoretical));
        assert_eq!(ShiftType::from_catalog("LABORATORIAL"), Some(ShiftType::Lab));
        assert_eq!(ShiftType::from_catalog("PROBLEMS"), Some(ShiftType::ProblemClass));
        assert_eq!(ShiftType::from_catalog("WORKSHOP"), None);
    }

    #[test]
    fn shift_number_needs_two_trailing_digits_and_a_prefix() {
        assert_eq!(shift_number("CDI2T07"), Some("07"));
        assert_eq!(shift_number("FISL145"), Some("45"));
        assert_eq!(shift_number("T7"), None);
        assert_eq!(shift_number("07"), None);
        assert_eq!(shift_number("CDI2T"), None);
        assert_eq!(shift_number(""), None);
    }
}
