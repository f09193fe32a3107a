//! Pointer input and gesture handling for swipestack

pub mod gesture_constants;
pub mod input;

pub use input::gestures::{GesturePhase, SettleOutcome, SwipeConfig, SwipeDirection, SwipeGestureSession};
pub use input::types::{PointerEvent, PointerEventKind, PointerId};
