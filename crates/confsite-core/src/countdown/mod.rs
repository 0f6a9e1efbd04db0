//! Conference countdown
//!
//! - [`TimeLeft`]: days/hours/minutes/seconds until the target, clamped at zero
//! - [`CountdownEngine`]: recomputes the value every tick from an injected clock
//! - [`CountdownHandle`]: owns the running ticker; stop or drop it to halt

mod engine;
mod time_left;

pub use engine::{CountdownEngine, CountdownHandle, CountdownTick, DEFAULT_TICK_INTERVAL};
pub use time_left::TimeLeft;
