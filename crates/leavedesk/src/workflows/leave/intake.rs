//! Untyped JSON intake for bulk imports of leave requests.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::{LeaveRequestId, LeaveStatus};
use super::store::LeaveRequestStore;

/// Validation failures raised while vetting an import payload.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("the provided data must be an array of leave requests")]
    NotAnArray,
    #[error("item at index {index} is not a leave request object")]
    NotAnObject { index: usize },
    #[error("item at index {index} could not be read: {detail}")]
    MalformedItem { index: usize, detail: String },
    #[error("item at index {index} is missing the required property: {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("item at index {index} has an invalid {field}: {detail}")]
    InvalidField {
        index: usize,
        field: &'static str,
        detail: String,
    },
    #[error("item at index {index} reuses the id {id}")]
    DuplicateId { index: usize, id: String },
}

/// A vetted record waiting for the store to backfill id and creation time.
#[derive(Debug, Clone)]
pub(crate) struct ParsedLeave {
    pub(crate) id: Option<LeaveRequestId>,
    pub(crate) student_id: String,
    pub(crate) student_name: String,
    pub(crate) reason: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) status: LeaveStatus,
    pub(crate) contact_number: String,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

/// Vets a raw payload without touching any store state.
pub(crate) fn vet_records(raw: &Value) -> Result<Vec<ParsedLeave>, ValidationError> {
    let items = raw.as_array().ok_or(ValidationError::NotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        records.push(vet_record(index, item)?);
    }

    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if let Some(id) = &record.id {
            if !seen.insert(id.0.as_str()) {
                return Err(ValidationError::DuplicateId {
                    index,
                    id: id.0.clone(),
                });
            }
        }
    }

    Ok(records)
}

fn vet_record(index: usize, item: &Value) -> Result<ParsedLeave, ValidationError> {
    if !item.is_object() {
        return Err(ValidationError::NotAnObject { index });
    }

    let row: RawLeaveRow = serde_json::from_value(item.clone()).map_err(|err| {
        ValidationError::MalformedItem {
            index,
            detail: err.to_string(),
        }
    })?;

    if let Some(field) = row.first_missing() {
        return Err(ValidationError::MissingField { index, field });
    }

    row.into_parsed(index)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLeaveRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    student_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    student_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    reason: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    end_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contact_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
}

impl RawLeaveRow {
    /// First required property that is absent or blank, in form order.
    fn first_missing(&self) -> Option<&'static str> {
        let required = [
            ("studentId", self.student_id.is_some()),
            ("studentName", self.student_name.is_some()),
            ("reason", self.reason.is_some()),
            ("startDate", self.start_date.is_some()),
            ("endDate", self.end_date.is_some()),
            ("status", self.status.is_some()),
            ("contactNumber", self.contact_number.is_some()),
        ];
        required
            .into_iter()
            .find_map(|(field, present)| (!present).then_some(field))
    }

    fn into_parsed(self, index: usize) -> Result<ParsedLeave, ValidationError> {
        let Self {
            id,
            student_id,
            student_name,
            reason,
            start_date,
            end_date,
            status,
            contact_number,
            created_at,
        } = self;

        let student_id = require(index, "studentId", student_id)?;
        let student_name = require(index, "studentName", student_name)?;
        let reason = require(index, "reason", reason)?;
        let start_raw = require(index, "startDate", start_date)?;
        let end_raw = require(index, "endDate", end_date)?;
        let status_raw = require(index, "status", status)?;
        let contact_number = require(index, "contactNumber", contact_number)?;

        let start_date = parse_date(&start_raw).ok_or_else(|| {
            invalid(index, "startDate", format!("'{start_raw}' is not a YYYY-MM-DD date"))
        })?;
        let end_date = parse_date(&end_raw).ok_or_else(|| {
            invalid(index, "endDate", format!("'{end_raw}' is not a YYYY-MM-DD date"))
        })?;
        let status = LeaveStatus::parse(&status_raw).ok_or_else(|| {
            invalid(
                index,
                "status",
                format!("'{status_raw}' is not one of pending, approved, rejected"),
            )
        })?;
        let created_at = match created_at {
            Some(raw) => Some(parse_timestamp(&raw).ok_or_else(|| {
                invalid(
                    index,
                    "createdAt",
                    format!("'{raw}' is not an RFC 3339 timestamp or YYYY-MM-DD date"),
                )
            })?),
            None => None,
        };

        Ok(ParsedLeave {
            id: id.map(LeaveRequestId),
            student_id,
            student_name,
            reason,
            start_date,
            end_date,
            status,
            contact_number,
            created_at,
        })
    }
}

fn require(
    index: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::MissingField { index, field })
}

fn invalid(index: usize, field: &'static str, detail: String) -> ValidationError {
    ValidationError::InvalidField {
        index,
        field,
        detail,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| Utc.from_utc_datetime(&datetime))
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}

#[cfg(test)]
pub(crate) fn parse_timestamp_for_tests(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(value)
}

/// Loads a JSON export from disk and replaces a store's collection with it.
pub struct LeaveImporter;

impl LeaveImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        store: &mut LeaveRequestStore,
    ) -> Result<usize, LeaveImportError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), store)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        store: &mut LeaveRequestStore,
    ) -> Result<usize, LeaveImportError> {
        let raw: Value = serde_json::from_reader(reader)?;
        let accepted = store.replace_all(&raw)?;
        Ok(accepted)
    }
}

/// Failures while loading leave data from an external JSON export.
#[derive(Debug)]
pub enum LeaveImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(ValidationError),
}

impl fmt::Display for LeaveImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read leave export: {err}"),
            Self::Json(err) => write!(f, "leave export is not valid JSON: {err}"),
            Self::Validation(err) => write!(f, "leave export was rejected: {err}"),
        }
    }
}

impl std::error::Error for LeaveImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LeaveImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LeaveImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ValidationError> for LeaveImportError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
