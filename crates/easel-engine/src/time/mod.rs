//! Time subsystem.
//!
//! Provides frame timing for the sketch loop without coupling to it:
//! - one `FrameClock` per runtime
//! - call `tick()` once per drawn frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
