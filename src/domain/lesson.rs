//! Lesson model: one concrete weekly time slot of a shift.

use std::collections::HashSet;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::{Occupation, ShiftType};

/// A single weekly time slot belonging to a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Display title, `"<course acronym> - <shift id>"`.
    pub title: String,
    /// Section type of the owning shift.
    pub shift_type: ShiftType,
    /// Slot start time.
    pub start: NaiveTime,
    /// Slot end time.
    pub end: NaiveTime,
    /// Day of the week the slot recurs on.
    pub weekday: Weekday,
    /// Room name, when the catalog reports one.
    pub room: Option<String>,
    /// Campus the slot takes place on.
    pub campus: String,
    /// Enrollment numbers of the owning shift.
    pub occupation: Occupation,
    /// Id of the owning shift's course.
    pub course_id: String,
}

impl Lesson {
    /// Slot duration in minutes.
    #[must_use]
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Title used in exports, with the room appended.
    #[must_use]
    pub fn exported_title(&self) -> String {
        format!("{} @ {}", self.title, self.room.as_deref().unwrap_or(""))
    }

    fn content_key(&self) -> (String, NaiveTime, NaiveTime, Weekday) {
        (self.title.clone(), self.start, self.end, self.weekday)
    }
}

/// Collapses duplicate lessons (identical title, start, end and weekday),
/// keeping first occurrences in order. Shifts can report back-to-back
/// identical-looking entries for a single recurring slot.
#[must_use]
pub fn keep_unique(lessons: Vec<Lesson>) -> Vec<Lesson> {
    let mut seen = HashSet::new();
    lessons.into_iter().filter(|lesson| seen.insert(lesson.content_key())).collect()
}
