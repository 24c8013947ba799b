use serde::{Deserialize, Serialize};

use crate::figure::series::{Series, SeriesKind};
use crate::figure::text::TextAnnotation;

/// A single plotting region: title, axis labels, plotted series, legend
/// attachment state, and axes-owned text annotations.
///
/// Empty strings are equivalent to absent for the title and labels, so
/// `set_title("")` clears a previously set title as far as inspection is
/// concerned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    title: String,
    xlabel: String,
    ylabel: String,
    series: Vec<Series>,
    legend_attached: bool,
    texts: Vec<TextAnnotation>,
}

impl Axes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_xlabel(&mut self, xlabel: impl Into<String>) {
        self.xlabel = xlabel.into();
    }

    pub fn set_ylabel(&mut self, ylabel: impl Into<String>) {
        self.ylabel = ylabel.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    #[must_use]
    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    /// Adds a rendered series to the axes. Rendering order is preserved.
    pub fn plot(&mut self, series: Series) {
        self.series.push(series);
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Series of one rendering style, in rendering order.
    pub fn series_of_kind(&self, kind: SeriesKind) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |series| series.kind() == kind)
    }

    /// Marks a legend as explicitly attached to the axes.
    ///
    /// Attachment alone does not make the legend "present" for grading;
    /// at least one plotted series must also carry a non-empty label.
    pub fn attach_legend(&mut self) {
        self.legend_attached = true;
    }

    #[must_use]
    pub fn legend_attached(&self) -> bool {
        self.legend_attached
    }

    /// True when at least one plotted series carries a non-empty label.
    #[must_use]
    pub fn has_labeled_series(&self) -> bool {
        self.series.iter().any(Series::is_labeled)
    }

    /// Adds an axes-owned text annotation. Axes-owned text never counts
    /// toward figure-level caption presence.
    pub fn add_text(&mut self, x: f64, y: f64, content: impl Into<String>) {
        self.texts.push(TextAnnotation::new(x, y, content));
    }

    #[must_use]
    pub fn texts(&self) -> &[TextAnnotation] {
        &self.texts
    }
}
