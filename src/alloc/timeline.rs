use crate::model::*;

use super::{minimum_rooms, validate_events, AllocError};

// ── Schedule audit ───────────────────────────────────────────────

/// Find two overlapping events placed in the same room.
///
/// Returns the pair of input positions (lower first), or `None` when the schedule is
/// conflict free. When several conflicts exist the one met first while sweeping each
/// room by start time is reported.
pub fn find_conflict(placed: &[(Span, RoomId)]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..placed.len()).collect();
    order.sort_by_key(|&i| (placed[i].1, placed[i].0.start));

    // (room, index of the event reaching furthest so far in that room)
    let mut reach: Option<(RoomId, usize)> = None;
    for i in order {
        let (span, room) = placed[i];
        match reach {
            Some((r, j)) if r == room => {
                if span.start < placed[j].0.end {
                    return Some((i.min(j), i.max(j)));
                }
                if span.end > placed[j].0.end {
                    reach = Some((room, i));
                }
            }
            _ => reach = Some((room, i)),
        }
    }
    None
}

// ── Peak windows ─────────────────────────────────────────────────

/// Time ranges during which the number of concurrent events equals the minimum
/// room count, merged into disjoint sorted spans.
pub fn peak_windows(events: &[Event]) -> Result<Vec<Span>, AllocError> {
    let peak = minimum_rooms(events)?;
    Ok(merge_overlapping(&saturated_spans(events, peak)))
}

/// Sweep-line: spans where at least `level` events are running at once.
fn saturated_spans(events: &[Event], level: usize) -> Vec<Span> {
    if events.is_empty() || level == 0 {
        return Vec::new();
    }

    // Ends sort before starts at the same instant (half-open spans).
    let mut points: Vec<(Ms, i32)> = Vec::with_capacity(events.len() * 2);
    for e in events {
        points.push((e.start, 1));
        points.push((e.end, -1));
    }
    points.sort_unstable();

    let mut result = Vec::new();
    let mut count = 0usize;
    let mut saturated_start: Option<Ms> = None;

    for &(time, delta) in &points {
        if delta > 0 {
            count += 1;
        } else {
            count -= 1;
        }

        if count >= level && saturated_start.is_none() {
            saturated_start = Some(time);
        } else if count < level
            && let Some(start) = saturated_start.take()
            && time > start
        {
            result.push(Span::new(start, time));
        }
    }

    result
}

/// Merge sorted overlapping/adjacent spans into disjoint spans.
fn merge_overlapping(sorted: &[Span]) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::new();
    for &span in sorted {
        if let Some(last) = merged.last_mut()
            && span.start <= last.end
        {
            last.end = last.end.max(span.end);
            continue;
        }
        merged.push(span);
    }
    merged
}

// ── Free slots ───────────────────────────────────────────────────

/// Consecutive `slot_ms`-long slots inside `window` that no event touches.
///
/// Slots are laid out from `window.start`; a trailing slot that would run past
/// `window.end` is dropped. An empty window or non-positive slot length yields nothing.
pub fn free_slots(events: &[Event], window: Span, slot_ms: Ms) -> Result<Vec<Span>, AllocError> {
    validate_events(events)?;
    if !window.is_valid() || slot_ms <= 0 {
        return Ok(Vec::new());
    }

    let mut busy: Vec<Span> = events
        .iter()
        .filter(|e| e.overlaps(&window))
        .copied()
        .collect();
    busy.sort_by_key(|s| s.start);
    let busy = merge_overlapping(&busy);

    let mut free = Vec::new();
    let mut bi = 0;
    let mut cursor = window.start;
    while let Some(slot_end) = cursor.checked_add(slot_ms) {
        if slot_end > window.end {
            break;
        }
        let slot = Span::new(cursor, slot_end);
        while bi < busy.len() && busy[bi].end <= slot.start {
            bi += 1;
        }
        if bi == busy.len() || busy[bi].start >= slot.end {
            free.push(slot);
        }
        cursor = slot_end;
    }

    Ok(free)
}
