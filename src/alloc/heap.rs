use std::cmp::Ordering;

use crate::model::{Ms, RoomId};

/// An open room: who it is and when its latest event ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomState {
    pub busy_until: Ms,
    pub room_id: RoomId,
}

impl RoomState {
    /// Heap key: earliest `busy_until` first, lower `room_id` on ties.
    fn key_cmp(&self, other: &RoomState) -> Ordering {
        self.busy_until
            .cmp(&other.busy_until)
            .then(self.room_id.cmp(&other.room_id))
    }
}

/// Array-backed binary min-heap of open rooms.
///
/// Children of slot `i` live at `2i + 1` and `2i + 2`. The ordering key is the whole
/// `(busy_until, room_id)` pair, so two rooms freeing at the same instant always come
/// out lowest id first regardless of insertion history.
#[derive(Debug, Default)]
pub struct RoomHeap {
    slots: Vec<RoomState>,
}

impl RoomHeap {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn peek(&self) -> Option<&RoomState> {
        self.slots.first()
    }

    pub fn push(&mut self, room: RoomState) {
        self.slots.push(room);
        self.sift_up(self.slots.len() - 1);
    }

    pub fn pop(&mut self) -> Option<RoomState> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let min = self.slots.pop();
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.slots[a].key_cmp(&self.slots[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent) {
                break;
            }
            self.slots.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.slots.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(busy_until: Ms, room_id: RoomId) -> RoomState {
        RoomState { busy_until, room_id }
    }

    fn drain(heap: &mut RoomHeap) -> Vec<RoomState> {
        std::iter::from_fn(|| heap.pop()).collect()
    }

    #[test]
    fn empty_heap() {
        let mut heap = RoomHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(heap.peek().is_none());
        assert!(heap.pop().is_none());
    }

    #[test]
    fn pops_in_busy_until_order() {
        let mut heap = RoomHeap::with_capacity(5);
        for (i, end) in [50, 10, 40, 20, 30].into_iter().enumerate() {
            heap.push(room(end, i));
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&room(10, 1)));
        let ends: Vec<Ms> = drain(&mut heap).iter().map(|r| r.busy_until).collect();
        assert_eq!(ends, vec![10, 20, 30, 40, 50]);
        assert!(heap.is_empty());
    }

    #[test]
    fn ties_break_on_room_id() {
        let mut heap = RoomHeap::new();
        heap.push(room(10, 3));
        heap.push(room(10, 0));
        heap.push(room(10, 2));
        heap.push(room(5, 7));
        heap.push(room(10, 1));
        assert_eq!(
            drain(&mut heap),
            vec![room(5, 7), room(10, 0), room(10, 1), room(10, 2), room(10, 3)]
        );
    }

    #[test]
    fn interleaved_push_pop() {
        let mut heap = RoomHeap::new();
        heap.push(room(30, 0));
        heap.push(room(10, 1));
        assert_eq!(heap.pop(), Some(room(10, 1)));
        heap.push(room(20, 1));
        heap.push(room(5, 2));
        assert_eq!(heap.pop(), Some(room(5, 2)));
        assert_eq!(heap.pop(), Some(room(20, 1)));
        assert_eq!(heap.pop(), Some(room(30, 0)));
        assert!(heap.pop().is_none());
    }

    #[test]
    fn single_element_pop_leaves_empty() {
        let mut heap = RoomHeap::new();
        heap.push(room(1, 0));
        assert_eq!(heap.pop(), Some(room(1, 0)));
        assert!(heap.is_empty());
    }
}
