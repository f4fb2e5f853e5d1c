//! JSON serialization for lab reports.

use crate::result::LabReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `LabReport`).
pub fn to_json(report: &LabReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `LabReport`).
pub fn to_json_pretty(report: &LabReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
