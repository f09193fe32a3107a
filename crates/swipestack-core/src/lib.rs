//! Core runtime for swipestack.
//!
//! Everything in this crate runs on a single logical thread: frame callbacks are
//! queued on a [`Runtime`] and drained by the host once per frame, and
//! [`SharedValue`] cells broadcast their current value to any number of readers.

mod frame_clock;
mod runtime;
mod shared_value;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameScheduler, Runtime, RuntimeHandle};
pub use shared_value::{ObserverRegistration, ReadOnlyValue, SharedValue};

pub(crate) type FrameCallbackId = u64;

/// Nanoseconds in one frame at 60 Hz.
pub const FRAME_NANOS_60HZ: u64 = 16_666_667;

pub mod prelude {
    pub use crate::frame_clock::FrameClock;
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::shared_value::{ReadOnlyValue, SharedValue};
}
