//! Read-only figure object model consumed by the inspection layer.
//!
//! Collaborator code (demo scripts, grading harnesses, tests) builds a
//! [`Figure`] with these types and hands it to the core by reference.
//! The core never constructs or mutates a figure.

pub mod axes;
pub mod series;
pub mod text;

pub use axes::Axes;
pub use series::{Series, SeriesKind};
pub use text::TextAnnotation;

use serde::{Deserialize, Serialize};

/// Top-level container holding plotting regions and free-standing
/// captions.
///
/// There is no ambient "current figure" registry: every inspection
/// operation takes an explicit `&Figure`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    axes: Vec<Axes>,
    texts: Vec<TextAnnotation>,
}

impl Figure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fresh axes region and returns it for configuration.
    pub fn add_axes(&mut self) -> &mut Axes {
        self.axes.push(Axes::new());
        let index = self.axes.len() - 1;
        &mut self.axes[index]
    }

    /// Appends a pre-built axes region.
    pub fn push_axes(&mut self, axes: Axes) {
        self.axes.push(axes);
    }

    #[must_use]
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self, index: usize) -> Option<&mut Axes> {
        self.axes.get_mut(index)
    }

    /// Adds a free-standing caption owned by the figure itself.
    pub fn add_text(&mut self, x: f64, y: f64, content: impl Into<String>) {
        self.texts.push(TextAnnotation::new(x, y, content));
    }

    /// Figure-level captions: every annotation reachable from the figure
    /// minus the ones owned by an axes. Ownership is exclusive, so the
    /// remainder is exactly the set added through [`Figure::add_text`].
    #[must_use]
    pub fn texts(&self) -> &[TextAnnotation] {
        &self.texts
    }

    /// Every text annotation reachable from the figure, axes-owned
    /// included.
    pub fn all_texts(&self) -> impl Iterator<Item = &TextAnnotation> {
        self.texts
            .iter()
            .chain(self.axes.iter().flat_map(|axes| axes.texts().iter()))
    }
}
