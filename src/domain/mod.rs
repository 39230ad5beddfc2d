//! Domain model: degrees, courses, shifts, lessons and the timetable
//! aggregate, with the identity rules derived from raw catalog data.

pub mod course;
pub mod degree;
pub mod lesson;
pub mod shift;
pub mod term;
pub mod timetable;

pub use course::Course;
pub use degree::Degree;
pub use lesson::Lesson;
pub use shift::{Occupation, Shift, ShiftType};
pub use term::AcademicTerm;
pub use timetable::{CourseShiftTypes, Timetable};
