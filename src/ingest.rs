//! Ingestion boundary: collector JSON rows to typed [`SampleRecord`]s.
//!
//! The measurement collector emits flat JSON rows of the form
//! `{"scenario": "form", "variant": "B0", "rep": 3, "INP": 184.0, ...}`
//! where metric fields may be `null` (no usable measurement) and rows may
//! carry non-numeric extras (nested event objects, rating strings). This
//! module validates the shape once, so the core never sees untyped data:
//! shape violations are errors, missing values are data.

use serde_json::Value;
use thiserror::Error;

use crate::types::SampleRecord;

/// Errors raised while converting collector output into sample records.
///
/// These indicate a collector defect, not expected missing data: `null`
/// or non-finite metric values pass through ingestion untouched and are
/// filtered later during grouping.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input was not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value was not an array of records.
    #[error("expected a JSON array of sample records")]
    NotAnArray,

    /// A row was not a JSON object.
    #[error("record {index}: expected a JSON object")]
    NotAnObject {
        /// 0-based position of the offending row.
        index: usize,
    },

    /// A row was missing `scenario` or `variant`, or it was not a string.
    #[error("record {index}: missing or non-string field `{field}`")]
    MissingField {
        /// 0-based position of the offending row.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A row's `rep` field was missing, non-integer, or less than 1.
    #[error("record {index}: field `rep` must be an integer >= 1")]
    InvalidReplicate {
        /// 0-based position of the offending row.
        index: usize,
    },
}

/// Parse a collector results file (a JSON array of rows) into records.
///
/// Fields other than `scenario`, `variant`, and `rep` are treated as
/// metrics when they are numbers or `null`; anything else (objects,
/// arrays, strings, booleans) is ignored.
///
/// # Errors
///
/// Returns an [`IngestError`] when the input is not valid JSON, is not an
/// array, or contains a row with a malformed shape.
pub fn parse_records(json: &str) -> Result<Vec<SampleRecord>, IngestError> {
    let value: Value = serde_json::from_str(json)?;
    let rows = value.as_array().ok_or(IngestError::NotAnArray)?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| record_from_value(index, row))
        .collect()
}

/// Convert a single collector row into a [`SampleRecord`].
pub fn record_from_value(index: usize, row: &Value) -> Result<SampleRecord, IngestError> {
    let object = row.as_object().ok_or(IngestError::NotAnObject { index })?;

    let scenario = object
        .get("scenario")
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField {
            index,
            field: "scenario",
        })?;
    let variant = object
        .get("variant")
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingField {
            index,
            field: "variant",
        })?;
    let replicate = object
        .get("rep")
        .and_then(Value::as_u64)
        .filter(|&rep| rep >= 1)
        .and_then(|rep| u32::try_from(rep).ok())
        .ok_or(IngestError::InvalidReplicate { index })?;

    let mut record = SampleRecord::new(scenario, variant, replicate);
    for (key, value) in object {
        if matches!(key.as_str(), "scenario" | "variant" | "rep") {
            continue;
        }
        match value {
            Value::Number(number) => {
                record = record.with_metric(key, number.as_f64());
            }
            Value::Null => {
                record = record.with_metric(key, None);
            }
            // Non-numeric extras (event payloads, rating strings) are not
            // metrics.
            _ => {}
        }
    }

    Ok(record)
}
