use serde::{Deserialize, Serialize};

/// A string anchored at a position, either figure-level (a caption) or
/// owned by a single axes region. Ownership is exclusive: an annotation
/// lives in exactly one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    x: f64,
    y: f64,
    content: String,
}

impl TextAnnotation {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when the annotation renders visible text.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
