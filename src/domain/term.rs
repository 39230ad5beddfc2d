//! Academic term parsing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An academic term such as `"2º Semestre 2019/2020"`.
///
/// The catalog reports terms as free-form strings following a loose
/// `<semester>[º] <semester-word> <year/year>` convention; the parsed
/// pieces are kept alongside the raw identifier so the original string
/// can always be sent back to the catalog unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicTerm {
    /// Raw identifier exactly as the catalog reports it.
    pub id: String,
    /// School-year part, e.g. `"2019/2020"`.
    pub term: String,
    /// Semester number (1 or 2).
    pub semester: u8,
}

impl AcademicTerm {
    /// Parses a term string of the form `<1|2>[º ]*<s-word>[ ]*<year/year>`.
    ///
    /// # Errors
    ///
    /// Returns a message when the string does not match the convention.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut chars = raw.chars().peekable();
        let semester = match chars.next() {
            Some('1') => 1,
            Some('2') => 2,
            _ => return Err(format!("unexpected academic term name: {raw}")),
        };
        while matches!(chars.peek(), Some('º' | ' ')) {
            chars.next();
        }
        if !matches!(chars.peek(), Some('s' | 'S')) {
            return Err(format!("unexpected academic term name: {raw}"));
        }
        while matches!(chars.peek(), Some(c) if c.is_alphabetic()) {
            chars.next();
        }
        while matches!(chars.peek(), Some(' ')) {
            chars.next();
        }
        let term: String = chars.collect();
        if term.is_empty() || !term.chars().all(|c| c.is_ascii_digit() || c == '/') {
            return Err(format!("unexpected academic term name: {raw}"));
        }
        Ok(Self { id: raw.to_string(), term, semester })
    }

    /// Parses a term string, falling back to a degraded id-only value
    /// when the string does not match the convention.
    ///
    /// The degraded form keeps the raw identifier usable for catalog
    /// requests; only the display pieces are lost.
    #[must_use]
    pub fn lenient(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| {
            eprintln!("{err}");
            Self { id: raw.to_string(), term: String::new(), semester: 0 }
        })
    }

    /// Human-readable title, e.g. `"2019/2020 2º"`.
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("{} {}º", self.term, self.semester)
    }
}

/// Shows the parsed title, or the raw identifier for degraded values.
impl fmt::Display for AcademicTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.semester == 0 {
            f.write_str(&self.id)
        } else {
            f.write_str(&self.display_title())
        }
    }
}

impl Ord for AcademicTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.term.cmp(&other.term).then(self.semester.cmp(&other.semester))
    }
}

impl PartialOrd for AcademicTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::AcademicTerm;

    #[test]
    fn parses_accented_form() {
        let term = AcademicTerm::parse("2º Semestre 2019/2020").unwrap();
        assert_eq!(term.semester, 2);
        assert_eq!(term.term, "2019/2020");
        assert_eq!(term.id, "2º Semestre 2019/2020");
    }

    #[test]
    fn parses_bare_form_without_spaces() {
        let term = AcademicTerm::parse("1Semestre 2017/2018").unwrap();
        assert_eq!(term.semester, 1);
        assert_eq!(term.term, "2017/2018");
    }

    #[test]
    fn parses_space_separated_form() {
        let term = AcademicTerm::parse("2 Semestre 2014/2015").unwrap();
        assert_eq!(term.semester, 2);
        assert_eq!(term.term, "2014/2015");
    }

    #[test]
    fn rejects_garbage() {
        assert!(AcademicTerm::parse("not a term").is_err());
        assert!(AcademicTerm::parse("3º Semestre 2019/2020").is_err());
        assert!(AcademicTerm::parse("2º Semestre").is_err());
    }

    #[test]
    fn lenient_keeps_raw_id_on_failure() {
        let term = AcademicTerm::lenient("mystery term");
        assert_eq!(term.id, "mystery term");
        assert_eq!(term.semester, 0);
    }

    #[test]
    fn display_degrades_to_raw_id() {
        assert_eq!(AcademicTerm::lenient("2º Semestre 2019/2020").to_string(), "2019/2020 2º");
        assert_eq!(AcademicTerm::lenient("mystery term").to_string(), "mystery term");
    }

    #[test]
    fn orders_by_year_then_semester() {
        let a = AcademicTerm::parse("2º Semestre 2018/2019").unwrap();
        let b = AcademicTerm::parse("1º Semestre 2019/2020").unwrap();
        let c = AcademicTerm::parse("2º Semestre 2019/2020").unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
