//! Platform abstraction layer
//!
//! Glue between the host and the simulation:
//! - `InputSlot`: latest pointer/quit sample, written by input handlers
//! - `TickClock`: converts wall-clock deltas into fixed 60 Hz ticks

pub mod clock;
pub mod input;

pub use clock::TickClock;
pub use input::InputSlot;
