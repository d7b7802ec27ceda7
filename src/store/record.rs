//! # Student Record Types
//!
//! The persisted record shape and the identifier newtype.
//!
//! Identifiers are numeric end-to-end: stored documents and success
//! responses carry a JSON number, and path segments are parsed back into
//! [`RecordId`]. A path segment that does not parse behaves like a
//! never-created identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric record identifier (epoch milliseconds with a monotonic bump)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Document key for the backing store
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Mutable record fields, as supplied by create and replace requests.
///
/// All fields are optional: the service stores what it was given, and
/// missing fields persist as `null` rather than being rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentFields {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub enrolled: Option<bool>,
}

impl StudentFields {
    /// Case-insensitive match on both name fields.
    ///
    /// Records missing either name never match.
    pub fn name_matches(&self, first_name: &str, last_name: &str) -> bool {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => {
                first.eq_ignore_ascii_case(first_name) && last.eq_ignore_ascii_case(last_name)
            }
            _ => false,
        }
    }
}

/// A persisted student record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub record_id: RecordId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl StudentRecord {
    pub fn new(record_id: RecordId, fields: StudentFields) -> Self {
        Self { record_id, fields }
    }
}
