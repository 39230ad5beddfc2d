//! Selection codec: compact shareable encoding of a timetable selection.
//!
//! The encoded form stores only `(course id, shift name)` identity pairs,
//! so decoding is not a pure inverse: every course id is re-resolved
//! against the live catalog to rebuild full entities. Decoding tolerates
//! partial failure — a group that cannot be resolved is skipped and its
//! error accumulated, never aborting the whole restore.

use std::sync::Mutex;

use crate::catalog::CatalogCache;
use crate::domain::{Course, Shift, Timetable};
use crate::ports::CatalogSource;

/// Separates course groups in the shifts field, and degree acronyms.
pub const GROUP_SEP: char = ';';

/// Separates the course id and shift names inside one group.
pub const FIELD_SEP: char = '~';

/// URL parameter carrying the timetable name (uri-encoded).
pub const PARAM_NAME: &str = "name";
/// URL parameter carrying the encoded shift groups.
pub const PARAM_SHIFTS: &str = "shifts";
/// URL parameter carrying the degree acronyms.
pub const PARAM_DEGREES: &str = "degrees";
/// URL parameter carrying the multi-shift flag.
pub const PARAM_MULTI: &str = "ismulti";
/// URL parameter carrying the academic term (uri-encoded).
pub const PARAM_TERM: &str = "term";

/// Available and selected shifts reconstructed by a decode.
#[derive(Debug, Clone, Default)]
pub struct ShiftState {
    /// Every shift of the resolved courses.
    pub available: Vec<Shift>,
    /// The shifts named in the encoded selection.
    pub selected: Vec<Shift>,
}

/// Best-effort result of decoding an encoded selection.
#[derive(Debug, Clone, Default)]
pub struct DecodedSelection {
    /// Courses resolved from the encoded groups, in encoded order.
    pub courses: Vec<Course>,
    /// Rebuilt shift state.
    pub state: ShiftState,
    /// Joined error text for every group that failed to resolve; empty
    /// when the whole string decoded cleanly.
    pub errors: String,
}

/// The five fields of a shareable state string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareableFields {
    /// Timetable display name.
    pub name: String,
    /// Encoded shift groups (`courseId~name~...;...`).
    pub shifts: String,
    /// Degree acronyms the courses were picked from.
    pub degrees: Vec<String>,
    /// Multi-shift flag.
    pub multi_shift: bool,
    /// Academic term identifier.
    pub term: String,
}

/// Encodes selected shifts as `courseId~shiftName~...` groups joined by
/// `;`, grouping by course id in first-seen order.
#[must_use]
pub fn encode_selection(selected: &[Shift]) -> String {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for shift in selected {
        let (course_id, stored_id) = shift.full_id();
        match groups.iter_mut().find(|(id, _)| *id == course_id) {
            Some((_, names)) => names.push(stored_id),
            None => groups.push((course_id, vec![stored_id])),
        }
    }
    groups
        .into_iter()
        .map(|(course_id, names)| format!("{course_id}{FIELD_SEP}{}", names.join(&FIELD_SEP.to_string())))
        .collect::<Vec<_>>()
        .join(&GROUP_SEP.to_string())
}

/// Decodes an encoded shifts field against the live catalog.
///
/// Each group's course id is resolved (through the per-term cache first),
/// its schedule fetched, and the named shifts re-selected. Groups that
/// fail — unknown id, duplicate id, transport failure, missing schedule —
/// are skipped with their message accumulated; decoding never aborts on
/// one bad entry.
pub async fn decode_selection(
    encoded: &str,
    term: &str,
    catalog: &dyn CatalogSource,
    cache: &Mutex<CatalogCache>,
) -> DecodedSelection {
    let mut decoded = DecodedSelection::default();
    let mut errors: Vec<String> = Vec::new();

    for group in encoded.split(GROUP_SEP).filter(|g| !g.is_empty()) {
        let mut fields = group.split(FIELD_SEP);
        let Some(course_id) = fields.next().filter(|id| !id.is_empty()) else {
            errors.push(format!("malformed selection group: {group}"));
            continue;
        };
        if decoded.courses.iter().any(|c| c.id == course_id) {
            errors.push(format!("repeated course in encoded selection: {course_id}"));
            continue;
        }

        let course = match resolve_course(course_id, term, catalog, cache).await {
            Ok(Some(course)) => course,
            Ok(None) => {
                errors.push(format!("unknown course: {course_id}"));
                continue;
            }
            Err(err) => {
                errors.push(format!("cannot obtain course {course_id}: {err}"));
                continue;
            }
        };

        let available = match catalog.course_schedules(&course, term).await {
            Ok(Some(shifts)) => shifts,
            Ok(None) => {
                errors.push(format!("cannot obtain schedule for course {course_id}"));
                continue;
            }
            Err(err) => {
                errors.push(format!("cannot obtain schedule for course {course_id}: {err}"));
                continue;
            }
        };

        let wanted: Vec<&str> = fields.collect();
        let selected: Vec<Shift> = available
            .iter()
            .filter(|shift| wanted.contains(&shift.stored_id()))
            .cloned()
            .collect();

        decoded.courses.push(course);
        decoded.state.available.extend(available);
        decoded.state.selected.extend(selected);
    }

    decoded.errors = errors.join(", ");
    decoded
}

/// Composes the query-string form of a timetable, with uri-encoded name
/// and term. All five fields are always present so the string is a valid
/// shareable state on its own.
#[must_use]
pub fn compose_share_string(timetable: &Timetable) -> String {
    let degrees: Vec<&str> =
        timetable.degree_acronyms().iter().map(String::as_str).collect();
    format!(
        "{PARAM_NAME}={}&{PARAM_SHIFTS}={}&{PARAM_DEGREES}={}&{PARAM_MULTI}={}&{PARAM_TERM}={}",
        urlencoding::encode(timetable.name()),
        encode_selection(timetable.selected_shifts()),
        degrees.join(&GROUP_SEP.to_string()),
        timetable.multi_shift_mode(),
        urlencoding::encode(timetable.academic_term()),
    )
}

/// Parses a shareable state string (optionally a full URL). All five
/// fields must be present; anything less is not a valid encoded timetable
/// and yields `None`.
#[must_use]
pub fn parse_share_string(raw: &str) -> Option<ShareableFields> {
    let query = raw.rsplit_once('?').map_or(raw, |(_, q)| q);
    let mut name = None;
    let mut shifts = None;
    let mut degrees = None;
    let mut multi_shift = None;
    let mut term = None;
    for pair in query.split('&') {
        // Valueless parameters (tracking tokens and the like) are not ours.
        let Some((key, value)) = pair.split_once('=') else { continue };
        match key {
            PARAM_NAME => name = Some(urlencoding::decode(value).ok()?.into_owned()),
            PARAM_SHIFTS => shifts = Some(value.to_string()),
            PARAM_DEGREES => {
                degrees = Some(
                    value
                        .split(GROUP_SEP)
                        .filter(|acronym| !acronym.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>(),
                );
            }
            PARAM_MULTI => multi_shift = Some(value == "true"),
            PARAM_TERM => term = Some(urlencoding::decode(value).ok()?.into_owned()),
            _ => {}
        }
    }
    Some(ShareableFields {
        name: name?,
        shifts: shifts?,
        degrees: degrees?,
        multi_shift: multi_shift?,
        term: term?,
    })
}

/// Rebuilds a full timetable from a shareable state string.
///
/// # Errors
///
/// Returns an error when the string is not a valid encoded timetable.
/// Per-group resolution failures do not error; they come back as the
/// accumulated error text beside the best-effort timetable.
pub async fn restore_timetable(
    raw: &str,
    catalog: &dyn CatalogSource,
    cache: &Mutex<CatalogCache>,
) -> Result<(Timetable, String), String> {
    let fields =
        parse_share_string(raw).ok_or_else(|| "not a valid encoded timetable".to_string())?;
    let decoded = decode_selection(&fields.shifts, &fields.term, catalog, cache).await;

    let timetable = Timetable::new(&fields.name, decoded.state.selected, fields.multi_shift, &fields.term)
        .set_available_shifts(decoded.state.available)
        .set_courses(decoded.courses)
        .set_degree_acronyms(fields.degrees);
    Ok((timetable, decoded.errors))
}

/// Resolves a course through the cache, falling back to the catalog and
/// caching the hit.
async fn resolve_course(
    course_id: &str,
    term: &str,
    catalog: &dyn CatalogSource,
    cache: &Mutex<CatalogCache>,
) -> Result<Option<Course>, Box<dyn std::error::Error + Send + Sync>> {
    if let Ok(guard) = cache.lock() {
        if let Some(course) = guard.course(term, course_id) {
            return Ok(Some(course.clone()));
        }
    }
    let course = catalog.course(course_id, term).await?;
    if let Some(course) = &course {
        if let Ok(mut guard) = cache.lock() {
            guard.store_course(term, course.clone());
        }
    }
    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::{compose_share_string, encode_selection, parse_share_string};
    use crate::domain::{course, Course, Occupation, Shift, ShiftType, Timetable};

    fn test_shift(course_id: &str, name: &str, shift_type: ShiftType, shift_id: &str) -> Shift {
        let course = Course {
            id: course_id.to_string(),
            acronym: format!("C{course_id}"),
            name: format!("Course {course_id}"),
            abbreviation: course::derive_abbreviation("Course"),
            degree_acronym: "LEIC".to_string(),
            url: String::new(),
        };
        Shift {
            course,
            name: name.to_string(),
            shift_type,
            shift_id: shift_id.to_string(),
            lessons: Vec::new(),
            all_lessons: Vec::new(),
            campus: String::new(),
            occupation: Occupation { current: 0, max: 0 },
            classes: Vec::new(),
        }
    }

    #[test]
    fn encode_groups_by_course_in_first_seen_order() {
        let selected = vec![
            test_shift("C1", "T01", ShiftType::Theoretical, "T01"),
            test_shift("C2", "L02", ShiftType::Lab, "L02"),
            test_shift("C1", "L05", ShiftType::Lab, "L05"),
        ];
        assert_eq!(encode_selection(&selected), "C1~T01~L05;C2~L02");
    }

    #[test]
    fn encode_empty_selection_is_empty() {
        assert_eq!(encode_selection(&[]), "");
    }

    #[test]
    fn share_string_round_trips_through_parse() {
        let selected = vec![test_shift("C1", "T01", ShiftType::Theoretical, "T01")];
        let timetable = Timetable::new("my schedule", selected, true, "2º Semestre 2019/2020")
            .set_degree_acronyms(["LEIC-A".to_string(), "MEEC".to_string()]);

        let share = compose_share_string(&timetable);
        let fields = parse_share_string(&share).unwrap();
        assert_eq!(fields.name, "my schedule");
        assert_eq!(fields.shifts, "C1~T01");
        assert_eq!(fields.degrees, vec!["LEIC-A".to_string(), "MEEC".to_string()]);
        assert!(fields.multi_shift);
        assert_eq!(fields.term, "2º Semestre 2019/2020");
    }

    #[test]
    fn share_string_is_ascii() {
        let timetable = Timetable::new("horário de exemplo", Vec::new(), false, "2º Semestre 2019/2020");
        assert!(compose_share_string(&timetable).is_ascii());
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert!(parse_share_string("name=x&shifts=C1~T01&degrees=&ismulti=false").is_none());
        assert!(parse_share_string("").is_none());
        assert!(parse_share_string("just some text").is_none());
    }

    #[test]
    fn parse_ignores_valueless_parameters() {
        let fields = parse_share_string(
            "utm&name=x&shifts=C1~T01&degrees=LEIC&ismulti=true&term=t&ref",
        )
        .unwrap();
        assert_eq!(fields.shifts, "C1~T01");
        assert!(fields.multi_shift);
    }

    #[test]
    fn parse_accepts_a_full_url() {
        let fields = parse_share_string(
            "https://example.com/?name=x&shifts=C1~T01&degrees=LEIC&ismulti=false&term=t",
        )
        .unwrap();
        assert_eq!(fields.shifts, "C1~T01");
        assert!(!fields.multi_shift);
    }

    #[test]
    fn parse_treats_empty_degrees_as_none_selected() {
        let fields =
            parse_share_string("name=x&shifts=&degrees=&ismulti=false&term=t").unwrap();
        assert!(fields.degrees.is_empty());
    }
}
