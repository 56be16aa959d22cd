use serde::{Deserialize, Serialize};

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Dense room index, handed out from 0 in order of first use.
pub type RoomId = usize;

/// Half-open interval `[start, end)`.
///
/// Unlike a booking stored somewhere, a span carries no identity of its own: when a
/// slice of spans is handed to an allocator, a span is known by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Ms,
    pub end: Ms,
}

/// One requested interval that needs exclusive use of a room.
pub type Event = Span;

impl Span {
    pub fn new(start: Ms, end: Ms) -> Self {
        Self { start, end }
    }

    /// A span is well formed when it has a positive duration.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Ms) -> bool {
        self.start <= t && t < self.end
    }
}

/// Room count plus the room picked for every input event, index-aligned with the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub room_count: usize,
    pub rooms: Vec<RoomId>,
}

impl Assignment {
    pub fn empty() -> Self {
        Self {
            room_count: 0,
            rooms: Vec::new(),
        }
    }

    /// Pair each event with the room it was given.
    pub fn placements(&self, events: &[Event]) -> Vec<(Span, RoomId)> {
        events.iter().copied().zip(self.rooms.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let s = Span::new(100, 200);
        assert_eq!(s.duration_ms(), 100);
        assert!(s.contains_instant(100));
        assert!(s.contains_instant(199));
        assert!(!s.contains_instant(200)); // half-open
    }

    #[test]
    fn span_overlap() {
        let a = Span::new(100, 200);
        let b = Span::new(150, 250);
        let c = Span::new(200, 300);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // adjacent, not overlapping
    }

    #[test]
    fn span_validity() {
        assert!(Span::new(0, 1).is_valid());
        assert!(!Span::new(5, 5).is_valid());
        assert!(!Span::new(10, 5).is_valid());
    }

    #[test]
    fn placements_pair_events_with_rooms() {
        let events = [Span::new(0, 30), Span::new(5, 10)];
        let a = Assignment {
            room_count: 2,
            rooms: vec![0, 1],
        };
        assert_eq!(
            a.placements(&events),
            vec![(Span::new(0, 30), 0), (Span::new(5, 10), 1)]
        );
    }

    #[test]
    fn span_json_shape() {
        let s: Span = serde_json::from_str(r#"{"start":0,"end":30}"#).unwrap();
        assert_eq!(s, Span::new(0, 30));
        assert!(serde_json::from_str::<Span>(r#"{"start":0.5,"end":30}"#).is_err());
    }
}
