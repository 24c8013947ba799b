use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::figure::Axes;
use crate::inspect::{has_title, has_xlabel, has_ylabel};

/// A structural element of an axes whose presence is graded.
///
/// The set of gradeable items is closed; callers driving a rubric from
/// configuration text go through [`FromStr`], which rejects unrecognized
/// names before any figure inspection happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistItem {
    Title,
    XLabel,
    YLabel,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 3] =
        [ChecklistItem::Title, ChecklistItem::XLabel, ChecklistItem::YLabel];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ChecklistItem::Title => "title",
            ChecklistItem::XLabel => "xlabel",
            ChecklistItem::YLabel => "ylabel",
        }
    }

    /// Runs the presence predicate for this item against one axes.
    #[must_use]
    pub fn check(self, axes: &Axes) -> bool {
        match self {
            ChecklistItem::Title => has_title(axes),
            ChecklistItem::XLabel => has_xlabel(axes),
            ChecklistItem::YLabel => has_ylabel(axes),
        }
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChecklistItem {
    type Err = GradeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "title" => Ok(ChecklistItem::Title),
            "xlabel" => Ok(ChecklistItem::XLabel),
            "ylabel" => Ok(ChecklistItem::YLabel),
            other => Err(GradeError::UnsupportedItem {
                name: other.to_owned(),
            }),
        }
    }
}
