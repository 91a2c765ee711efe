//! Core data model for Lucy.
//!
//! Static story data (stages and their choices), the mutable progress of
//! one playthrough, and the events that drive it.

mod choice;
mod event;
mod progress;
mod stage;
mod tracker;

pub use choice::{Choice, Effect, Flag};
pub use event::Event;
pub use progress::{Ending, Progress, Scene};
pub use stage::{Secondary, Stage};
pub use tracker::{Flags, Tension, Tracker};
