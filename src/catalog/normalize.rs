//! Pure normalization of raw catalog payloads into domain entities.

use chrono::{Datelike, NaiveDateTime};

use super::dto::{CourseDto, DegreeDto, LessonDto, ScheduleDto, ShiftDto};
use crate::domain::{course, lesson, shift, Course, Degree, Lesson, Occupation, Shift};

/// Builds a [`Degree`] from its payload.
#[must_use]
pub fn degree_from_dto(dto: DegreeDto) -> Degree {
    Degree {
        id: dto.id,
        acronym: dto.acronym,
        name: dto.name,
        academic_terms: dto.academic_terms,
    }
}

/// Builds a [`Course`] from its payload and the acronym of the degree it
/// was fetched under. Never fails; acronym and abbreviation derivation
/// degrade gracefully on malformed input.
#[must_use]
pub fn course_from_dto(dto: CourseDto, degree_acronym: &str) -> Course {
    Course {
        acronym: course::derive_acronym(&dto.acronym, &dto.name),
        abbreviation: course::derive_abbreviation(&dto.name),
        id: dto.id,
        name: dto.name,
        degree_acronym: degree_acronym.to_string(),
        url: dto.url.unwrap_or_default(),
    }
}

/// Joins the degree acronyms a standalone course record is offered under,
/// e.g. `"LEIC-A/MEEC"`. Empty when the payload lists none.
#[must_use]
pub fn competence_acronyms(dto: &CourseDto) -> String {
    dto.competences
        .first()
        .map(|competence| {
            competence
                .degrees
                .iter()
                .map(|d| d.acronym.as_str())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

/// Builds a [`Shift`] from its payload.
///
/// Returns `None` and pushes a message when the shift name does not match
/// the `<prefix><2-digit-number>` convention or the type string is
/// unknown; the caller skips the shift and keeps the batch going.
/// Malformed lesson stamps degrade the shift (the slot is dropped and
/// reported) rather than failing it.
pub fn shift_from_dto(dto: &ShiftDto, course: &Course, errors: &mut Vec<String>) -> Option<Shift> {
    let Some(number) = shift::shift_number(&dto.name) else {
        errors.push(format!("unexpected shift name - {}", dto.name));
        return None;
    };
    let shift_type = match dto.types.first().map(|t| shift::ShiftType::from_catalog(t)) {
        Some(Some(shift_type)) => shift_type,
        _ => {
            errors.push(format!("unknown shift type for {}", dto.name));
            return None;
        }
    };
    let shift_id = format!("{}{number}", shift_type.letter());
    let campus = dto
        .rooms
        .as_ref()
        .and_then(|rooms| rooms.first())
        .and_then(|room| room.top_level_space.as_ref())
        .map(|space| space.name.clone())
        .unwrap_or_default();
    let occupation = Occupation { current: dto.occupation.current, max: dto.occupation.max };

    let mut all_lessons = Vec::with_capacity(dto.lessons.len());
    for raw in &dto.lessons {
        match lesson_from_dto(raw, course, shift_type, &shift_id, &campus, occupation) {
            Ok(lesson) => all_lessons.push(lesson),
            Err(err) => errors.push(format!("{}: {err}", dto.name)),
        }
    }

    Some(Shift {
        course: course.clone(),
        name: dto.name.clone(),
        shift_type,
        shift_id,
        lessons: lesson::keep_unique(all_lessons.clone()),
        all_lessons,
        campus,
        occupation,
        classes: dto.classes.clone(),
    })
}

/// Normalizes a whole schedule payload, skipping unparsable shifts and
/// collecting their error messages.
#[must_use]
pub fn schedule_shifts(dto: &ScheduleDto, course: &Course) -> (Vec<Shift>, Vec<String>) {
    let mut errors = Vec::new();
    let shifts = dto
        .shifts
        .iter()
        .filter_map(|shift| shift_from_dto(shift, course, &mut errors))
        .collect();
    (shifts, errors)
}

fn lesson_from_dto(
    dto: &LessonDto,
    course: &Course,
    shift_type: crate::domain::ShiftType,
    shift_id: &str,
    shift_campus: &str,
    occupation: Occupation,
) -> Result<Lesson, String> {
    let start = parse_stamp(&dto.start)?;
    let end = parse_stamp(&dto.end)?;
    let campus = dto
        .room
        .as_ref()
        .and_then(|room| room.top_level_space.as_ref())
        .map_or_else(|| shift_campus.to_string(), |space| space.name.clone());
    Ok(Lesson {
        title: format!("{} - {shift_id}", course.acronym),
        shift_type,
        start: start.time(),
        end: end.time(),
        weekday: start.weekday(),
        room: dto.room.as_ref().and_then(|room| room.name.clone()),
        campus,
        occupation,
        course_id: course.id.clone(),
    })
}

/// Parses a `"YYYY-MM-DD HH:MM[:SS]"` catalog stamp.
fn parse_stamp(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .map_err(|_| format!("malformed lesson stamp {raw}"))
}
