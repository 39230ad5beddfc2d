//! Raw catalog payload shapes.
//!
//! Every field the normalizer consumes is typed here; optional catalog
//! fields are `Option` or defaulted so an unexpected payload shape is
//! rejected or degraded at this boundary instead of trusted downstream.

use serde::Deserialize;

/// A degree record from `/api/degrees`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeDto {
    /// Catalog identifier.
    pub id: String,
    /// Degree acronym.
    pub acronym: String,
    /// Full degree name.
    pub name: String,
    /// Terms the degree is offered in.
    #[serde(default)]
    pub academic_terms: Vec<String>,
}

/// A course record from `/api/degrees/<id>/courses` or `/api/courses/<id>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    /// Catalog identifier.
    #[serde(default)]
    pub id: String,
    /// Raw acronym; may carry trailing digits or punctuation.
    pub acronym: String,
    /// Full course name.
    pub name: String,
    /// Course page URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Term the record belongs to.
    #[serde(default)]
    pub academic_term: Option<String>,
    /// Credit units, carried as the catalog's free-form string.
    #[serde(default)]
    pub credits: Option<String>,
    /// Degree listings this course appears under.
    #[serde(default)]
    pub competences: Vec<CompetenceDto>,
}

/// A competence block linking a course to degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetenceDto {
    /// Degrees sharing this course.
    #[serde(default)]
    pub degrees: Vec<MiniDegreeDto>,
}

/// Degree reference inside a course's competence block.
#[derive(Debug, Clone, Deserialize)]
pub struct MiniDegreeDto {
    /// Catalog identifier.
    pub id: String,
    /// Full degree name.
    pub name: String,
    /// Degree acronym.
    pub acronym: String,
}

/// A course schedule from `/api/courses/<id>/schedule`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDto {
    /// Every shift of the course.
    #[serde(default)]
    pub shifts: Vec<ShiftDto>,
}

/// One shift inside a schedule payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftDto {
    /// Raw shift name, expected to follow `<prefix><2-digit-number>`.
    pub name: String,
    /// Raw type strings; only the first is meaningful.
    #[serde(default)]
    pub types: Vec<String>,
    /// Raw lesson slots.
    #[serde(default)]
    pub lessons: Vec<LessonDto>,
    /// Rooms the shift uses; the first room's campus names the shift's.
    #[serde(default)]
    pub rooms: Option<Vec<RoomDto>>,
    /// Enrollment numbers.
    pub occupation: OccupationDto,
    /// Enrolled class names, when the catalog exposes them.
    #[serde(default)]
    pub classes: Vec<String>,
}

/// One lesson slot inside a shift payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonDto {
    /// Start stamp, `"YYYY-MM-DD HH:MM[:SS]"`.
    pub start: String,
    /// End stamp, same format.
    pub end: String,
    /// Room of the slot, when known.
    #[serde(default)]
    pub room: Option<RoomDto>,
}

/// A room reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    /// Room name.
    #[serde(default)]
    pub name: Option<String>,
    /// The campus-level space containing the room.
    #[serde(default)]
    pub top_level_space: Option<SpaceDto>,
}

/// A campus-level space.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceDto {
    /// Space name (the campus).
    pub name: String,
}

/// Enrollment numbers as the catalog reports them.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OccupationDto {
    /// Students currently enrolled.
    pub current: u32,
    /// Enrollment cap.
    pub max: u32,
}

#[cfg(test)]
mod tests {
    use super::{CourseDto, ScheduleDto};

    #[test]
    fn course_payload_tolerates_missing_optionals() {
        let dto: CourseDto = serde_json::from_str(
            r#"{"acronym": "CDI1", "name": "Calculus I"}"#,
        )
        .unwrap();
        assert!(dto.url.is_none());
        assert!(dto.competences.is_empty());
    }

    #[test]
    fn schedule_payload_parses_nested_shift() {
        let dto: ScheduleDto = serde_json::from_str(
            r#"{
                "shifts": [{
                    "name": "CalcT01",
                    "types": ["TEORICA"],
                    "occupation": {"current": 31, "max": 30},
                    "lessons": [{
                        "start": "2020-02-17 09:30",
                        "end": "2020-02-17 11:00",
                        "room": {"name": "V1.25", "topLevelSpace": {"name": "Alameda"}}
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(dto.shifts.len(), 1);
        assert_eq!(dto.shifts[0].occupation.current, 31);
        assert_eq!(
            dto.shifts[0].lessons[0].room.as_ref().unwrap().top_level_space.as_ref().unwrap().name,
            "Alameda"
        );
    }
}
