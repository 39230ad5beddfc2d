//! The timetable aggregate: an immutable selection of shifts.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Course, Shift, ShiftType};
use crate::color::{self, CourseColor};

/// Per-course summary of which shift types exist and which are selected.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseShiftTypes {
    /// The course.
    pub course: Course,
    /// The course's assigned color.
    pub color: CourseColor,
    /// For each shift type present: `true` when a shift of that type is
    /// selected, `false` when only available.
    pub shift_types: BTreeMap<ShiftType, bool>,
}

/// A named timetable: available and selected shifts, courses and their
/// colors, plus the multi-shift flag and academic term.
///
/// Immutable value object. Every mutator returns a new `Timetable` (an
/// unchanged clone on no-op); callers hold a list of timetables and swap
/// them wholesale, so no interior mutability is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    name: String,
    academic_term: String,
    degree_acronyms: BTreeSet<String>,
    multi_shift: bool,
    available_shifts: Vec<Shift>,
    selected_shifts: Vec<Shift>,
    courses: BTreeSet<Course>,
    /// Frozen course id → hex background map; assigned colors never
    /// change so shareable links and exports stay stable.
    course_colors: BTreeMap<String, String>,
}

impl Timetable {
    /// Creates a timetable from an initial selection. Courses are derived
    /// from the selected shifts and each gets a color straight away.
    #[must_use]
    pub fn new(name: &str, selected_shifts: Vec<Shift>, multi_shift: bool, academic_term: &str) -> Self {
        let courses: BTreeSet<Course> =
            selected_shifts.iter().map(|s| s.course.clone()).collect();
        let mut timetable = Self {
            name: name.to_string(),
            academic_term: academic_term.to_string(),
            degree_acronyms: BTreeSet::new(),
            multi_shift,
            available_shifts: Vec::new(),
            selected_shifts,
            courses,
            course_colors: BTreeMap::new(),
        };
        timetable.ensure_courses_have_color();
        timetable
    }

    /// An empty timetable with no term.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("", Vec::new(), false, "")
    }

    // =================
    // Plain accessors

    /// The timetable's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The academic term this timetable belongs to.
    #[must_use]
    pub fn academic_term(&self) -> &str {
        &self.academic_term
    }

    /// Acronyms of the degrees courses were picked from.
    #[must_use]
    pub fn degree_acronyms(&self) -> &BTreeSet<String> {
        &self.degree_acronyms
    }

    /// Whether several shifts of the same course+type may be selected.
    #[must_use]
    pub fn multi_shift_mode(&self) -> bool {
        self.multi_shift
    }

    /// Every shift available for selection.
    #[must_use]
    pub fn available_shifts(&self) -> &[Shift] {
        &self.available_shifts
    }

    /// The currently selected shifts.
    #[must_use]
    pub fn selected_shifts(&self) -> &[Shift] {
        &self.selected_shifts
    }

    /// The courses present in this timetable.
    #[must_use]
    pub fn courses(&self) -> &BTreeSet<Course> {
        &self.courses
    }

    // =================
    // Copy-with-override mutators

    /// Renames the timetable. Used for rename and duplication.
    #[must_use]
    pub fn set_name(&self, name: &str) -> Self {
        if name == self.name {
            return self.clone();
        }
        let mut next = self.clone();
        next.name = name.to_string();
        next
    }

    /// Fills in the academic term, but only when none is set yet.
    #[must_use]
    pub fn set_academic_term(&self, academic_term: &str) -> Self {
        if !self.academic_term.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.academic_term = academic_term.to_string();
        next
    }

    /// Replaces the degree acronym set.
    #[must_use]
    pub fn set_degree_acronyms<I>(&self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut next = self.clone();
        next.degree_acronyms = acronyms.into_iter().collect();
        next
    }

    /// Replaces the available shifts.
    #[must_use]
    pub fn set_available_shifts(&self, shifts: Vec<Shift>) -> Self {
        let mut next = self.clone();
        next.available_shifts = shifts;
        next
    }

    /// Replaces the course set and assigns a color to every course that
    /// lacks one. Existing colors are untouched.
    #[must_use]
    pub fn set_courses<I>(&self, courses: I) -> Self
    where
        I: IntoIterator<Item = Course>,
    {
        let mut next = self.clone();
        next.courses = courses.into_iter().collect();
        next.ensure_courses_have_color();
        next
    }

    /// Toggles a shift.
    ///
    /// A selected shift is deselected. An unselected shift is selected;
    /// outside multi-shift mode, a selected shift of the same course and
    /// type (a different instance) is dropped in the same step, keeping
    /// at most one shift per course+type.
    #[must_use]
    pub fn toggle_shift(&self, chosen: &Shift) -> Self {
        let idx = self.selected_shifts.iter().position(|s| s.same_shift(chosen));
        let replacing_idx = if self.multi_shift {
            // Multiple shifts of the same type are allowed, replace nothing.
            None
        } else {
            self.selected_shifts
                .iter()
                .position(|s| Shift::is_same_course_and_type(s, chosen))
        };

        let mut selected = self.selected_shifts.clone();
        if let Some(idx) = idx {
            selected.remove(idx);
        } else {
            selected.push(chosen.clone());
            if let Some(replacing_idx) = replacing_idx {
                selected.remove(replacing_idx);
            }
        }
        self.with_selected_shifts(selected)
    }

    /// Flips multi-shift mode. Already-conflicting selections are left
    /// alone; callers should consult [`Timetable::has_conflicting_selection`]
    /// before allowing the flag off.
    #[must_use]
    pub fn set_multi_shift_mode(&self, mode: bool) -> Self {
        if mode == self.multi_shift {
            return self.clone();
        }
        let mut next = self.clone();
        next.multi_shift = mode;
        next
    }

    /// Whether any two selected shifts are conflicting siblings
    /// (same course and type, different instance).
    #[must_use]
    pub fn has_conflicting_selection(&self) -> bool {
        self.selected_shifts.iter().enumerate().any(|(i, a)| {
            self.selected_shifts[i + 1..]
                .iter()
                .any(|b| Shift::is_same_course_and_type(a, b))
        })
    }

    /// Substitutes refreshed shifts into both lists by identity, leaving
    /// unmatched entries untouched. Selection structure never changes, so
    /// a late-arriving refresh cannot clobber a newer selection.
    #[must_use]
    pub fn update_occupancies(&self, new_shifts: &[Shift]) -> Self {
        let substitute = |shift: &Shift| {
            new_shifts.iter().find(|s| s.same_shift(shift)).cloned().unwrap_or_else(|| shift.clone())
        };
        let mut next = self.clone();
        next.available_shifts = self.available_shifts.iter().map(substitute).collect();
        next.selected_shifts = self.selected_shifts.iter().map(substitute).collect();
        next
    }

    // =================
    // Colors

    /// The assigned color pair for a course, falling back to the black
    /// sentinel (with white text) when the course has none.
    #[must_use]
    pub fn course_color(&self, course: &Course) -> CourseColor {
        let background = self
            .course_colors
            .get(&course.id)
            .map_or(color::SENTINEL_BACKGROUND, String::as_str);
        CourseColor::from_background(background)
    }

    /// Overrides the color of a course.
    #[must_use]
    pub fn set_course_color(&self, course: &Course, background: &str) -> Self {
        if self.course_colors.get(&course.id).is_some_and(|c| c == background) {
            return self.clone();
        }
        let mut next = self.clone();
        next.course_colors.insert(course.id.clone(), background.to_string());
        next
    }

    /// The full frozen course id → background map.
    #[must_use]
    pub fn course_colors(&self) -> &BTreeMap<String, String> {
        &self.course_colors
    }

    fn ensure_courses_have_color(&mut self) {
        for course in &self.courses {
            self.course_colors
                .entry(course.id.clone())
                .or_insert_with(color::random_dark_color);
        }
    }

    // =================
    // Reports

    /// Per-course view of available and selected shift types, used to
    /// render course chips.
    #[must_use]
    pub fn courses_with_shift_types(&self) -> Vec<CourseShiftTypes> {
        let mut by_course: BTreeMap<Course, BTreeMap<ShiftType, bool>> = BTreeMap::new();
        for shift in &self.available_shifts {
            by_course
                .entry(shift.course.clone())
                .or_default()
                .entry(shift.shift_type)
                .or_insert(false);
        }
        for shift in &self.selected_shifts {
            by_course
                .entry(shift.course.clone())
                .or_default()
                .insert(shift.shift_type, true);
        }
        by_course
            .into_iter()
            .map(|(course, shift_types)| CourseShiftTypes {
                color: self.course_color(&course),
                course,
                shift_types,
            })
            .collect()
    }

    /// Replaces the selected shift list, pulling in any course the new
    /// selection references that the timetable does not know yet.
    fn with_selected_shifts(&self, selected: Vec<Shift>) -> Self {
        let mut next = self.clone();
        for shift in &selected {
            if !next.courses.contains(&shift.course) {
                next.courses.insert(shift.course.clone());
            }
        }
        next.selected_shifts = selected;
        next.ensure_courses_have_color();
        next
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Weekday};

    use super::Timetable;
    use crate::domain::{
        course, Course, Lesson, Occupation, Shift, ShiftType,
    };

    fn test_course(id: &str, name: &str) -> Course {
        Course {
            id: id.to_string(),
            acronym: course::derive_acronym(name, name),
            name: name.to_string(),
            abbreviation: course::derive_abbreviation(name),
            degree_acronym: "LEIC".to_string(),
            url: String::new(),
        }
    }

    fn test_shift(course: &Course, name: &str, shift_type: ShiftType, number: &str) -> Shift {
        let shift_id = format!("{}{number}", shift_type.letter());
        let lesson = Lesson {
            title: format!("{} - {shift_id}", course.acronym),
            shift_type,
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            weekday: Weekday::Mon,
            room: None,
            campus: "Alameda".to_string(),
            occupation: Occupation { current: 0, max: 30 },
            course_id: course.id.clone(),
        };
        Shift {
            course: course.clone(),
            name: name.to_string(),
            shift_type,
            shift_id,
            lessons: vec![lesson.clone()],
            all_lessons: vec![lesson],
            campus: "Alameda".to_string(),
            occupation: Occupation { current: 0, max: 30 },
            classes: Vec::new(),
        }
    }

    fn identity_pairs(timetable: &Timetable) -> Vec<(String, String)> {
        timetable
            .selected_shifts()
            .iter()
            .map(|s| (s.course.id.clone(), s.name.clone()))
            .collect()
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let cal = test_course("1971", "Calculus");
        let lab = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");

        let selected = Timetable::empty().toggle_shift(&lab);
        assert_eq!(identity_pairs(&selected), vec![("1971".to_string(), "CalcL01".to_string())]);

        let deselected = selected.toggle_shift(&lab);
        assert!(deselected.selected_shifts().is_empty());
    }

    #[test]
    fn toggle_pair_is_idempotent_in_both_modes() {
        let cal = test_course("1971", "Calculus");
        let l01 = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let l02 = test_shift(&cal, "CalcL02", ShiftType::Lab, "02");

        for multi_shift in [false, true] {
            let base = Timetable::empty()
                .set_multi_shift_mode(multi_shift)
                .toggle_shift(&l01);
            let round_tripped = base.toggle_shift(&l02).toggle_shift(&l02);
            assert_eq!(
                identity_pairs(&round_tripped),
                identity_pairs(&base),
                "multi_shift={multi_shift}"
            );
        }
    }

    #[test]
    fn sibling_shift_replaces_outside_multi_shift_mode() {
        let cal = test_course("1971", "Calculus");
        let l01 = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let l02 = test_shift(&cal, "CalcL02", ShiftType::Lab, "02");

        let timetable = Timetable::empty().toggle_shift(&l01).toggle_shift(&l02);
        assert_eq!(identity_pairs(&timetable), vec![("1971".to_string(), "CalcL02".to_string())]);
    }

    #[test]
    fn sibling_shifts_coexist_in_multi_shift_mode() {
        let cal = test_course("1971", "Calculus");
        let l01 = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let l02 = test_shift(&cal, "CalcL02", ShiftType::Lab, "02");

        let timetable = Timetable::empty()
            .set_multi_shift_mode(true)
            .toggle_shift(&l01)
            .toggle_shift(&l02);
        assert_eq!(timetable.selected_shifts().len(), 2);
        assert!(timetable.has_conflicting_selection());
    }

    #[test]
    fn different_types_never_replace_each_other() {
        let cal = test_course("1971", "Calculus");
        let lab = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let lecture = test_shift(&cal, "CalcT01", ShiftType::Theoretical, "01");

        let timetable = Timetable::empty().toggle_shift(&lab).toggle_shift(&lecture);
        assert_eq!(timetable.selected_shifts().len(), 2);
        assert!(!timetable.has_conflicting_selection());
    }

    #[test]
    fn disabling_multi_shift_keeps_existing_conflicts() {
        let cal = test_course("1971", "Calculus");
        let l01 = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let l02 = test_shift(&cal, "CalcL02", ShiftType::Lab, "02");

        let timetable = Timetable::empty()
            .set_multi_shift_mode(true)
            .toggle_shift(&l01)
            .toggle_shift(&l02)
            .set_multi_shift_mode(false);
        assert_eq!(timetable.selected_shifts().len(), 2);
        assert!(timetable.has_conflicting_selection());
    }

    #[test]
    fn selected_courses_join_the_course_set_with_a_color() {
        let cal = test_course("1971", "Calculus");
        let lab = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");

        let timetable = Timetable::empty().toggle_shift(&lab);
        assert!(timetable.courses().contains(&cal));
        let color = timetable.course_color(&cal);
        assert_ne!(color.background, crate::color::SENTINEL_BACKGROUND);
    }

    #[test]
    fn colors_freeze_once_assigned() {
        let cal = test_course("1971", "Calculus");
        let timetable = Timetable::empty().set_courses([cal.clone()]);
        let first = timetable.course_color(&cal);
        let again = timetable.set_courses([cal.clone()]).course_color(&cal);
        assert_eq!(first, again);
    }

    #[test]
    fn unknown_course_color_falls_back_to_sentinel() {
        let color = Timetable::empty().course_color(&test_course("404", "Ghost"));
        assert_eq!(color.background, "#000000");
        assert_eq!(color.text, "#ffffff");
    }

    #[test]
    fn set_course_color_overrides_and_noops() {
        let cal = test_course("1971", "Calculus");
        let timetable = Timetable::empty().set_courses([cal.clone()]);
        let recolored = timetable.set_course_color(&cal, "#123456");
        assert_eq!(recolored.course_color(&cal).background, "#123456");
        let unchanged = recolored.set_course_color(&cal, "#123456");
        assert_eq!(unchanged, recolored);
    }

    #[test]
    fn update_occupancies_substitutes_by_identity() {
        let cal = test_course("1971", "Calculus");
        let l01 = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let timetable = Timetable::empty()
            .set_available_shifts(vec![l01.clone()])
            .toggle_shift(&l01);

        let mut refreshed = l01.clone();
        refreshed.occupation = Occupation { current: 25, max: 20 };
        let mut unrelated = test_shift(&cal, "CalcL09", ShiftType::Lab, "09");
        unrelated.occupation = Occupation { current: 1, max: 1 };

        let updated = timetable.update_occupancies(&[refreshed, unrelated]);
        // Over-capacity values pass through untouched.
        assert_eq!(updated.selected_shifts()[0].occupation.current, 25);
        assert_eq!(updated.available_shifts()[0].occupation.current, 25);
        assert_eq!(identity_pairs(&updated), identity_pairs(&timetable));
    }

    #[test]
    fn set_academic_term_only_fills_empty() {
        let timetable = Timetable::empty().set_academic_term("2º Semestre 2019/2020");
        assert_eq!(timetable.academic_term(), "2º Semestre 2019/2020");
        let unchanged = timetable.set_academic_term("1º Semestre 2020/2021");
        assert_eq!(unchanged.academic_term(), "2º Semestre 2019/2020");
    }

    #[test]
    fn courses_with_shift_types_flags_selected_types() {
        let cal = test_course("1971", "Calculus");
        let lab = test_shift(&cal, "CalcL01", ShiftType::Lab, "01");
        let lecture = test_shift(&cal, "CalcT01", ShiftType::Theoretical, "01");

        let timetable = Timetable::empty()
            .set_available_shifts(vec![lab.clone(), lecture.clone()])
            .set_courses([cal.clone()])
            .toggle_shift(&lab);

        let report = timetable.courses_with_shift_types();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].shift_types.get(&ShiftType::Lab), Some(&true));
        assert_eq!(report[0].shift_types.get(&ShiftType::Theoretical), Some(&false));
    }
}
