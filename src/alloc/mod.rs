mod assigning;
mod counting;
mod error;
mod heap;
mod timeline;

pub use assigning::assign_rooms;
pub use counting::minimum_rooms;
pub use error::AllocError;
pub use heap::{RoomHeap, RoomState};
pub use timeline::{find_conflict, free_slots, peak_windows};

use crate::model::Event;

/// Reject the first event with a non-positive duration before any work is done.
pub(crate) fn validate_events(events: &[Event]) -> Result<(), AllocError> {
    match events.iter().position(|e| !e.is_valid()) {
        Some(index) => Err(AllocError::InvalidInterval {
            index,
            start: events[index].start,
            end: events[index].end,
        }),
        None => Ok(()),
    }
}
