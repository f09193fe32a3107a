//! Animation system for swipestack
//!
//! Spring physics that drive a [`swipestack_core::SharedValue`] frame by frame, and
//! the piecewise-linear interpolation used to derive styles from animated values.

mod animation;
mod interpolate;

pub use animation::*;
pub use interpolate::*;
