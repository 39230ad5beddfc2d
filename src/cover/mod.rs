//! Minimal class cover: which enrolled classes to attend.
//!
//! Given the selected shifts and their enrolled-class lists, computes a
//! small set of classes whose students jointly cover every selected
//! shift. Uses greedy weighted set cover — exact minimum set cover is
//! NP-hard, so the result is a heuristic approximation, not a guaranteed
//! minimum. Ties on coverage break to the lexicographically smallest
//! class name so equivalent inputs always produce the same report.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::Shift;

/// Placeholder reported for a shift with no eligible class.
pub const NO_CLASS: &str = "no class available";

/// The minimal-classes report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalClassesReport {
    /// Per shift label, the full filtered class list comma-joined, or the
    /// [`NO_CLASS`] placeholder when the filter leaves nothing.
    pub classes_by_shift: BTreeMap<String, String>,
    /// The chosen cover set, lexicographically sorted.
    pub minimal_classes: Vec<String>,
}

/// Computes the minimal-classes report for a selection.
///
/// When `degree_acronyms` is non-empty, each shift's class list is first
/// filtered to classes whose name starts with one of the acronyms (class
/// names encode their degree as a leading substring); an empty filter
/// means any degree is eligible. Shifts left with no candidate class are
/// reported with the placeholder and excluded from the cover.
#[must_use]
pub fn minimal_classes(selected: &[Shift], degree_acronyms: &[String]) -> MinimalClassesReport {
    let mut report = MinimalClassesReport::default();
    // class name -> shift labels it covers
    let mut coverage: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut uncovered: BTreeSet<String> = BTreeSet::new();

    for shift in selected {
        let label = shift.label();
        let eligible: Vec<&String> = shift
            .classes
            .iter()
            .filter(|class| {
                degree_acronyms.is_empty()
                    || degree_acronyms.iter().any(|acronym| class.starts_with(acronym.as_str()))
            })
            .collect();

        if eligible.is_empty() {
            report.classes_by_shift.insert(label, NO_CLASS.to_string());
            continue;
        }
        for class in &eligible {
            coverage.entry((*class).clone()).or_default().insert(label.clone());
        }
        report.classes_by_shift.insert(
            label.clone(),
            eligible.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", "),
        );
        uncovered.insert(label);
    }

    let mut cover: BTreeSet<String> = BTreeSet::new();
    while !uncovered.is_empty() {
        // BTreeMap iteration is ascending, so on ties the first (smallest)
        // class name sticks.
        let best = coverage
            .iter()
            .map(|(class, covered)| (class, covered.intersection(&uncovered).count()))
            .max_by(|(a_class, a_count), (b_class, b_count)| {
                a_count.cmp(b_count).then_with(|| b_class.cmp(a_class))
            });
        let Some((class, count)) = best else { break };
        if count == 0 {
            break;
        }
        let class = class.clone();
        if let Some(covered) = coverage.remove(&class) {
            for label in covered {
                uncovered.remove(&label);
            }
        }
        cover.insert(class);
    }

    report.minimal_classes = cover.into_iter().collect();
    report
}
