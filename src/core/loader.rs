//! Reading a timeline export into records.

use crate::core::index::{DayIndex, InvalidRecordPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::models::record::RECORDS_FIELD;
use chrono::TimeZone;
use serde_json::Value;

/// Parse the raw document and return the elements of the records array.
///
/// Malformed JSON is a `Parse` error; a document without a
/// `semanticSegments` array is an `InputShape` error.
pub fn parse_document(raw: &str) -> AppResult<Vec<Value>> {
    let doc: Value = serde_json::from_str(raw)?;

    match doc {
        Value::Object(mut map) => match map.remove(RECORDS_FIELD) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(AppError::InputShape(format!(
                "'{RECORDS_FIELD}' is not an array"
            ))),
            None => Err(AppError::InputShape(format!(
                "missing '{RECORDS_FIELD}' field"
            ))),
        },
        _ => Err(AppError::InputShape("top-level value is not an object".into())),
    }
}

/// Shallow shape check of one record.
pub fn record_from_value(value: Value) -> AppResult<Record> {
    serde_json::from_value(value).map_err(|e| AppError::InvalidRecord(e.to_string()))
}

/// Decode every record of the document, stopping at the first broken one.
pub fn load_records(raw: &str) -> AppResult<Vec<Record>> {
    parse_document(raw)?
        .into_iter()
        .enumerate()
        .map(|(i, v)| record_from_value(v).map_err(|e| e.at_record(i)))
        .collect()
}

/// Parse, shape-check and index a document in one pass.
pub fn load_index<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
    policy: InvalidRecordPolicy,
) -> AppResult<DayIndex> {
    let values = parse_document(raw)?;
    DayIndex::build_from(values.into_iter().map(record_from_value), tz, policy)
}
