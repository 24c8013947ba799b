use crate::figure::{Axes, Figure};

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff the axes title is a non-empty string.
#[must_use]
pub fn has_title(axes: &Axes) -> bool {
    is_present(axes.title())
}

/// True iff the x-axis label is a non-empty string.
#[must_use]
pub fn has_xlabel(axes: &Axes) -> bool {
    is_present(axes.xlabel())
}

/// True iff the y-axis label is a non-empty string.
#[must_use]
pub fn has_ylabel(axes: &Axes) -> bool {
    is_present(axes.ylabel())
}

/// True iff a legend is present on the axes for grading purposes.
///
/// Both conditions are required: at least one plotted series must carry
/// a non-empty label, and a legend must have been explicitly attached.
/// A labeled series without an attached legend reports false, as does an
/// attached legend over unlabeled series.
#[must_use]
pub fn has_legend(axes: &Axes) -> bool {
    axes.has_labeled_series() && axes.legend_attached()
}

/// True iff the figure carries at least one figure-level caption with
/// non-empty content.
///
/// Only annotations owned by the figure itself count; axes-owned text is
/// excluded by ownership, not by string matching. An empty caption set
/// reports false without inspecting any content.
#[must_use]
pub fn has_text(figure: &Figure) -> bool {
    let captions = figure.texts();
    if captions.is_empty() {
        return false;
    }
    captions.iter().any(|caption| caption.has_content())
}
