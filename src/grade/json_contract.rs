use serde::{Deserialize, Serialize};

use crate::error::{GradeError, GradeResult};
use crate::grade::grader::GradeReport;

pub const GRADE_REPORT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisting grade reports from harness code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReportJsonContractV1 {
    pub schema_version: u32,
    pub report: GradeReport,
}

impl GradeReport {
    pub fn to_json_contract_v1_pretty(&self) -> GradeResult<String> {
        let payload = GradeReportJsonContractV1 {
            schema_version: GRADE_REPORT_JSON_SCHEMA_V1,
            report: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GradeError::InvalidData(format!("failed to serialize grade report contract v1: {e}"))
        })
    }

    /// Parses either a bare report or the versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> GradeResult<Self> {
        if let Ok(report) = serde_json::from_str::<GradeReport>(input) {
            return Ok(report);
        }
        let payload: GradeReportJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GradeError::InvalidData(format!("failed to parse grade report json payload: {e}"))
        })?;
        if payload.schema_version != GRADE_REPORT_JSON_SCHEMA_V1 {
            return Err(GradeError::InvalidData(format!(
                "unsupported grade report schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.report)
    }
}
