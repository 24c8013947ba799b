//! Checklist aggregation and weighted scoring.

pub mod checklist;
pub mod grader;
pub mod json_contract;
pub mod log;
pub mod rubric;

pub use checklist::ChecklistItem;
pub use grader::{GradeReport, MAX_POINTS_EPSILON, check_figure, grade_figure};
pub use json_contract::{GRADE_REPORT_JSON_SCHEMA_V1, GradeReportJsonContractV1};
pub use log::CheckLog;
pub use rubric::{ReferencePair, Rubric};
