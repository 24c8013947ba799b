use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::grade::checklist::ChecklistItem;

/// Structured boolean record of which checklist items and reference
/// pairs were found.
///
/// Both maps iterate in request order. An entry that was never written
/// (a figure with zero axes regions) stays absent; absent and false are
/// distinct states and callers should not collapse them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckLog {
    pub items: IndexMap<ChecklistItem, bool>,
    pub data: IndexMap<usize, bool>,
}

impl CheckLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for one checklist item, or `None` when the item was never
    /// checked.
    #[must_use]
    pub fn item(&self, item: ChecklistItem) -> Option<bool> {
        self.items.get(&item).copied()
    }

    /// Result for one reference pair by supplied index, or `None` when
    /// it was never checked.
    #[must_use]
    pub fn data_at(&self, index: usize) -> Option<bool> {
        self.data.get(&index).copied()
    }

    #[must_use]
    pub fn satisfied_items(&self) -> usize {
        self.items.values().filter(|found| **found).count()
    }

    #[must_use]
    pub fn satisfied_data(&self) -> usize {
        self.data.values().filter(|found| **found).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.data.is_empty()
    }
}
