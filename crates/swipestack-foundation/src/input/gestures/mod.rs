pub mod swipe;

pub use swipe::{GesturePhase, SettleOutcome, SwipeConfig, SwipeDirection, SwipeGestureSession};
