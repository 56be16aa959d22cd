use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::alloc::{assign_rooms, minimum_rooms};
use crate::model::Event;
use crate::observability::*;
use crate::wire::SetReport;

/// Which allocator to run on each set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Room count only.
    Count,
    /// Room count plus per-event room ids.
    Assign,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Count => "count",
            Mode::Assign => "assign",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "count" => Ok(Mode::Count),
            "assign" => Ok(Mode::Assign),
            other => Err(format!("unknown mode {other:?}, expected count or assign")),
        }
    }
}

/// Solve one set on the current thread and record metrics for it.
pub fn solve(set: usize, events: &[Event], mode: Mode) -> SetReport {
    let started = Instant::now();
    let report = match mode {
        Mode::Count => SetReport::counted(set, minimum_rooms(events)),
        Mode::Assign => SetReport::assigned(set, assign_rooms(events)),
    };
    let status = if report.is_ok() { "ok" } else { "invalid" };

    metrics::counter!(ALLOCATIONS_TOTAL, "mode" => mode.label(), "status" => status).increment(1);
    metrics::histogram!(ALLOCATION_DURATION_SECONDS, "mode" => mode.label())
        .record(started.elapsed().as_secs_f64());
    metrics::histogram!(SET_EVENTS).record(events.len() as f64);
    if let Some(rooms) = report.rooms {
        metrics::histogram!(SET_ROOMS).record(rooms as f64);
    }
    report
}

/// Solve independent interval sets in parallel on the blocking pool.
///
/// At most `max_parallel` sets are in flight at once. Reports come back in input
/// order; a bad set yields an error report without affecting the others.
pub async fn run_batch(sets: Vec<Vec<Event>>, mode: Mode, max_parallel: usize) -> Vec<SetReport> {
    let semaphore = Arc::new(Semaphore::new(max_parallel.max(1)));
    let mut handles = Vec::with_capacity(sets.len());

    for (set, events) in sets.into_iter().enumerate() {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => {
                handles.push((set, Err(e.to_string())));
                continue;
            }
        };
        metrics::gauge!(SETS_IN_FLIGHT).increment(1.0);
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit; // held until the set is solved
            let report = solve(set, &events, mode);
            metrics::gauge!(SETS_IN_FLIGHT).decrement(1.0);
            report
        });
        handles.push((set, Ok(handle)));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for (set, handle) in handles {
        let report = match handle {
            Ok(handle) => match handle.await {
                Ok(report) => report,
                Err(e) => {
                    warn!("set {set} solver task failed: {e}");
                    SetReport::failed(set, format!("solver task failed: {e}"))
                }
            },
            Err(e) => SetReport::failed(set, e),
        };
        if let Some(err) = &report.error {
            debug!("set {set} rejected: {err}");
        }
        reports.push(report);
    }
    reports
}
