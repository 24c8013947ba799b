use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::figure::Figure;
use crate::grade::checklist::ChecklistItem;
use crate::grade::log::CheckLog;
use crate::grade::rubric::Rubric;
use crate::inspect::{has_data, has_text};

/// Below this magnitude the maximum attainable points are treated as
/// zero and the grade is undefined.
pub const MAX_POINTS_EPSILON: f64 = 1e-6;

/// Grade plus the check log it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    /// Percentage in [0, 100], or `None` when the rubric requested
    /// nothing and grading is undefined.
    pub grade: Option<f64>,
    pub log: CheckLog,
}

impl GradeReport {
    /// True when the rubric was empty and no numeric grade exists.
    #[must_use]
    pub fn is_ungraded(&self) -> bool {
        self.grade.is_none()
    }
}

/// Looks for the rubric's items and reference data in the axes regions
/// of a figure.
///
/// Every axes region is visited; each predicate result overwrites the
/// log entry written by the previous axes (last-write-wins, not a
/// logical OR; single-axes figures are the expected case). With the
/// `title_or_text` fallback enabled, a requested title that is still
/// missing after its predicate ran is substituted by figure-level
/// caption presence. A figure with zero axes leaves both maps untouched.
#[must_use]
pub fn check_figure(figure: &Figure, rubric: &Rubric) -> CheckLog {
    let mut log = CheckLog::new();
    for axes in figure.axes() {
        for &item in rubric.items() {
            log.items.insert(item, item.check(axes));
        }
        if rubric.title_or_text() && log.item(ChecklistItem::Title) == Some(false) {
            log.items.insert(ChecklistItem::Title, has_text(figure));
        }
        for (index, pair) in rubric.data_refs().iter().enumerate() {
            log.data.insert(index, has_data(axes, pair.x(), pair.y()));
        }
    }
    debug!(
        axes_count = figure.axes().len(),
        items_found = log.satisfied_items(),
        data_found = log.satisfied_data(),
        "checked figure"
    );
    log
}

/// Grades a figure against a rubric, returning the percentage grade and
/// the underlying check log.
///
/// The grade is the weighted share of satisfied entries. When the
/// maximum attainable points are numerically indistinguishable from zero
/// the grade is `None` (undefined, not a zero score); callers must
/// branch on [`GradeReport::is_ungraded`] explicitly.
#[must_use]
pub fn grade_figure(figure: &Figure, rubric: &Rubric) -> GradeReport {
    let log = check_figure(figure, rubric);

    let max_points = rubric.item_points() * rubric.items().len() as f64
        + rubric.data_points() * rubric.data_refs().len() as f64;
    let earned_points = rubric.item_points() * log.satisfied_items() as f64
        + rubric.data_points() * log.satisfied_data() as f64;

    if max_points.abs() <= MAX_POINTS_EPSILON {
        debug!(max_points, "empty rubric, grade undefined");
        return GradeReport { grade: None, log };
    }

    let grade = earned_points / max_points * 100.0;
    debug!(grade, earned_points, max_points, "graded figure");
    GradeReport {
        grade: Some(grade),
        log,
    }
}
