pub mod event;

pub use event::{Coordinates, EventEntry, NewEventEntry};
