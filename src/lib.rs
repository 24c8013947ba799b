//! figgrade: structural grading of rendered chart figures.
//!
//! The crate inspects a read-only [`Figure`] for required structural
//! elements (title, axis labels, legend, caption text) and for plotted
//! data matching reference series under floating-point tolerance, then
//! turns the resulting checklist into a weighted percentage grade. It is
//! built for automated coursework grading, where student code produces
//! the figure and the grader verifies required elements without human
//! inspection.
//!
//! Figure construction (plotting, layout, rendering) belongs to the
//! collaborator side; the grading core only ever reads the object graph
//! it is handed.
//!
//! ```
//! use figgrade::{ChecklistItem, Figure, Rubric, Series, grade_figure};
//!
//! let x: Vec<f64> = (0..51).map(|i| i as f64 * 0.1).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//!
//! let mut figure = Figure::new();
//! let axes = figure.add_axes();
//! axes.set_title("my title");
//! axes.set_xlabel("x");
//! axes.set_ylabel("y");
//! axes.plot(Series::line(x.clone(), y.clone())?);
//!
//! let rubric = Rubric::new()
//!     .with_items(ChecklistItem::ALL)
//!     .with_reference(x, y);
//! let report = grade_figure(&figure, &rubric);
//! assert_eq!(report.grade, Some(100.0));
//! # Ok::<(), figgrade::GradeError>(())
//! ```

pub mod error;
pub mod figure;
pub mod grade;
pub mod inspect;
pub mod telemetry;

pub use error::{GradeError, GradeResult};
pub use figure::{Axes, Figure, Series, SeriesKind, TextAnnotation};
pub use grade::{CheckLog, ChecklistItem, GradeReport, Rubric, check_figure, grade_figure};
