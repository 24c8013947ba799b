use crate::figure::{Axes, SeriesKind};

/// Absolute term of the element-wise closeness test.
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Relative term of the element-wise closeness test, scaled by the
/// reference magnitude.
pub const RELATIVE_TOLERANCE: f64 = 1e-5;

/// Element-wise approximate equality against a reference sequence.
///
/// Callers must have checked lengths already; trailing elements of a
/// longer slice would otherwise be ignored by the zip.
fn allclose(values: &[f64], reference: &[f64]) -> bool {
    values
        .iter()
        .zip(reference)
        .all(|(value, expected)| {
            (value - expected).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * expected.abs()
        })
}

/// True iff some series rendered on the axes numerically matches the
/// reference pair.
///
/// Line-style series are scanned first, then scatter-style, each in
/// rendering order; the first match wins. A candidate is compared only
/// when both its x and y lengths equal the reference lengths; a length
/// mismatch is a normal non-match, never an error. Values are compared
/// with a small absolute/relative tolerance rather than bitwise, since
/// recomputed data may carry negligible drift.
#[must_use]
pub fn has_data(axes: &Axes, x_ref: &[f64], y_ref: &[f64]) -> bool {
    let lines = axes.series_of_kind(SeriesKind::Line);
    let scatters = axes.series_of_kind(SeriesKind::Scatter);
    for series in lines.chain(scatters) {
        if series.x().len() != x_ref.len() || series.y().len() != y_ref.len() {
            continue;
        }
        if allclose(series.x(), x_ref) && allclose(series.y(), y_ref) {
            return true;
        }
    }
    false
}
