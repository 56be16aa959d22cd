use tracing::debug;

use crate::model::*;

use super::heap::{RoomHeap, RoomState};
use super::{validate_events, AllocError};

/// Minimum room count plus a concrete room for every event.
///
/// Events are visited by start time (input position breaks ties). Each one reuses the
/// room that frees earliest if that room is already free at its start, otherwise it
/// opens a new room. Only the heap minimum is ever inspected per event, so when
/// several rooms are free the one with the earliest `busy_until` (then lowest id) wins.
///
/// `rooms[i]` in the result is the room given to `events[i]`.
pub fn assign_rooms(events: &[Event]) -> Result<Assignment, AllocError> {
    validate_events(events)?;
    if events.is_empty() {
        return Ok(Assignment::empty());
    }

    let mut order: Vec<usize> = (0..events.len()).collect();
    // Stable sort keeps equal starts in input order.
    order.sort_by_key(|&i| events[i].start);

    let mut heap = RoomHeap::with_capacity(events.len());
    let mut rooms: Vec<RoomId> = vec![0; events.len()];
    let mut next_id: RoomId = 0;

    for i in order {
        let event = events[i];
        let room_id = match heap.peek().copied() {
            Some(room) if room.busy_until <= event.start => {
                heap.pop();
                room.room_id
            }
            _ => {
                let id = next_id;
                next_id += 1;
                id
            }
        };

        heap.push(RoomState {
            busy_until: event.end,
            room_id,
        });
        rooms[i] = room_id;
    }

    debug!(events = events.len(), rooms = next_id, "assigned rooms");
    Ok(Assignment {
        room_count: next_id,
        rooms,
    })
}
