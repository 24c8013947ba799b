use serde::{Deserialize, Serialize};

use crate::error::{GradeError, GradeResult};

/// Rendering style of a plotted series.
///
/// Both styles carry the same numeric payload; graders must treat a
/// reference pair found in either style as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Points joined into a connected polyline.
    Line,
    /// Discrete, unconnected point collection.
    Scatter,
}

/// One rendered (x, y) numeric sequence pair on an axes region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    kind: SeriesKind,
    x: Vec<f64>,
    y: Vec<f64>,
    label: Option<String>,
}

impl Series {
    /// Creates a line-style series from equal-length x/y sequences.
    pub fn line(x: Vec<f64>, y: Vec<f64>) -> GradeResult<Self> {
        Self::new(SeriesKind::Line, x, y)
    }

    /// Creates a scatter-style series from equal-length x/y sequences.
    pub fn scatter(x: Vec<f64>, y: Vec<f64>) -> GradeResult<Self> {
        Self::new(SeriesKind::Scatter, x, y)
    }

    fn new(kind: SeriesKind, x: Vec<f64>, y: Vec<f64>) -> GradeResult<Self> {
        if x.len() != y.len() {
            return Err(GradeError::InvalidData(format!(
                "series x/y length mismatch: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self {
            kind,
            x,
            y,
            label: None,
        })
    }

    /// Attaches a legend label to the series.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True when the series carries a non-empty legend label.
    #[must_use]
    pub fn is_labeled(&self) -> bool {
        self.label
            .as_deref()
            .is_some_and(|label| !label.trim().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
