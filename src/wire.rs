use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::alloc::AllocError;
use crate::model::*;

// ── Request ──────────────────────────────────────────────────────

/// Either a bare list of events or a batch of independent event sets.
///
/// Timestamps are integer milliseconds; fractional or non-numeric values fail to
/// deserialize, so malformed instants never reach the allocators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Request {
    Single(Vec<Event>),
    Batch { sets: Vec<Vec<Event>> },
}

impl Request {
    pub fn into_sets(self) -> Vec<Vec<Event>> {
        match self {
            Request::Single(events) => vec![events],
            Request::Batch { sets } => sets,
        }
    }
}

pub fn parse_request(input: &str) -> Result<Request, WireError> {
    Ok(serde_json::from_str(input)?)
}

// ── Response ─────────────────────────────────────────────────────

/// Outcome for one input set, keyed by its position in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetReport {
    pub set: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Vec<RoomId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SetReport {
    pub fn counted(set: usize, result: Result<usize, AllocError>) -> Self {
        match result {
            Ok(rooms) => Self {
                set,
                rooms: Some(rooms),
                assignment: None,
                error: None,
            },
            Err(e) => Self::failed(set, e.to_string()),
        }
    }

    pub fn assigned(set: usize, result: Result<Assignment, AllocError>) -> Self {
        match result {
            Ok(a) => Self {
                set,
                rooms: Some(a.room_count),
                assignment: Some(a.rooms),
                error: None,
            },
            Err(e) => Self::failed(set, e.to_string()),
        }
    }

    pub fn failed(set: usize, error: String) -> Self {
        Self {
            set,
            rooms: None,
            assignment: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Write one JSON object per line, in the order given.
pub fn write_reports<W: Write>(out: &mut W, reports: &[SetReport]) -> Result<(), WireError> {
    for report in reports {
        serde_json::to_writer(&mut *out, report)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

// ── Errors ───────────────────────────────────────────────────────

#[derive(Debug)]
pub enum WireError {
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::Json(e) => write!(f, "malformed request: {e}"),
            WireError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::Json(e) => Some(e),
            WireError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for WireError {
    fn from(e: serde_json::Error) -> Self {
        WireError::Json(e)
    }
}

impl From<std::io::Error> for WireError {
    fn from(e: std::io::Error) -> Self {
        WireError::Io(e)
    }
}
