use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Token minted for every accepted submission. Completions carrying an
/// older token are ignored by [`crate::update`].
pub type SessionId = u64;

/// Body of `POST /scrape`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub url: String,
    pub code: String,
}

/// Backend-reported state of a scrape task, as returned by either the
/// scrape endpoint or the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Pending {
        task_id: Option<String>,
        message: String,
    },
    Success {
        result_file: String,
        message: String,
    },
    Scraped {
        result_file: String,
        message: String,
    },
    Error {
        message: String,
    },
    /// A status string outside the known set.
    Other {
        status: String,
        message: String,
    },
}

impl TaskStatus {
    pub fn name(&self) -> &str {
        match self {
            TaskStatus::Pending { .. } => "pending",
            TaskStatus::Success { .. } => "success",
            TaskStatus::Scraped { .. } => "scraped",
            TaskStatus::Error { .. } => "error",
            TaskStatus::Other { status, .. } => status,
        }
    }
}

/// Event and seat data produced by the backend for one scrape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    pub held_on: Scalar,
    pub location: String,
    pub count: SeatCount,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub sections: BTreeMap<String, Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatCount {
    pub section: u32,
    pub row: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub currency: String,
    #[serde(default)]
    pub rows: Vec<SeatRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatRow {
    pub row: Scalar,
    pub price: Scalar,
}

/// A JSON value the backend sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral amounts print without a trailing ".0".
            Scalar::Number(value)
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 =>
            {
                write!(f, "{}", *value as i64)
            }
            Scalar::Number(value) => write!(f, "{value}"),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}
