//! Minimum-room interval scheduling.
//!
//! [`minimum_rooms`] answers how many interchangeable rooms a set of half-open
//! intervals needs; [`assign_rooms`] also says which room each interval gets.
//! Both are pure functions over a borrowed slice and may be called from any
//! number of threads at once.

pub mod alloc;
pub mod batch;
pub mod model;
pub mod observability;
pub mod wire;

pub use alloc::{assign_rooms, minimum_rooms, AllocError};
pub use model::{Assignment, Event, Ms, RoomId, Span};
