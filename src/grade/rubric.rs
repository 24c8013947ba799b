use serde::{Deserialize, Serialize};

use crate::error::GradeResult;
use crate::grade::checklist::ChecklistItem;

/// One externally supplied (x, y) reference the grader expects to find
/// plotted.
///
/// The two sequences are compared independently against a candidate
/// series, so no equal-length invariant is imposed between them here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferencePair {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ReferencePair {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }
}

/// Call-time grading configuration: which items to look for, which
/// reference data to look for, the caption fallback, and point weights.
///
/// Duplicate requested items are allowed; they re-check and overwrite
/// the same log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    items: Vec<ChecklistItem>,
    data_refs: Vec<ReferencePair>,
    title_or_text: bool,
    item_points: f64,
    data_points: f64,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            data_refs: Vec::new(),
            title_or_text: false,
            item_points: 1.0,
            data_points: 1.0,
        }
    }
}

impl Rubric {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests one checklist item.
    #[must_use]
    pub fn with_item(mut self, item: ChecklistItem) -> Self {
        self.items.push(item);
        self
    }

    /// Requests several checklist items at once.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = ChecklistItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Requests checklist items by configuration-text name.
    ///
    /// Fails fast on the first unrecognized name, before any figure is
    /// inspected.
    pub fn with_named_items<'a>(
        mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> GradeResult<Self> {
        for name in names {
            self.items.push(name.parse()?);
        }
        Ok(self)
    }

    /// Requests one reference data pair. Log indices follow the order
    /// pairs are supplied.
    #[must_use]
    pub fn with_reference(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.data_refs.push(ReferencePair::new(x, y));
        self
    }

    /// When set, a non-empty figure-level caption substitutes for a
    /// missing axes title. Default: off.
    #[must_use]
    pub fn with_title_or_text(mut self, enabled: bool) -> Self {
        self.title_or_text = enabled;
        self
    }

    /// Points awarded per satisfied checklist item. Default: 1.0.
    #[must_use]
    pub fn with_item_points(mut self, points: f64) -> Self {
        self.item_points = points;
        self
    }

    /// Points awarded per satisfied reference pair. Default: 1.0.
    #[must_use]
    pub fn with_data_points(mut self, points: f64) -> Self {
        self.data_points = points;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    #[must_use]
    pub fn data_refs(&self) -> &[ReferencePair] {
        &self.data_refs
    }

    #[must_use]
    pub fn title_or_text(&self) -> bool {
        self.title_or_text
    }

    #[must_use]
    pub fn item_points(&self) -> f64 {
        self.item_points
    }

    #[must_use]
    pub fn data_points(&self) -> f64 {
        self.data_points
    }

    /// True when the rubric requests nothing at all; grading such a
    /// rubric is undefined rather than zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.data_refs.is_empty()
    }
}
