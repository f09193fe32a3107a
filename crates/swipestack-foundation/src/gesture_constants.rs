//! Shared constants for the swipe gesture and the card projection.
//!
//! Distances are in logical pixels and are expressed as fractions of the
//! reference width captured when the deck is built.

/// Fraction of the reference width a release must exceed to commit a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// How far a committed card travels, in reference widths, before it is
/// considered gone. Past 1.0 so the card fully leaves the visible area.
pub const DEFAULT_FLY_OFF_MULTIPLIER: f32 = 1.5;

/// Number of stack positions rendered before cards are fully hidden.
pub const DEFAULT_MAX_VISIBLE_DEPTH: usize = 3;

/// Deepest stack that still yields a positive scale for every visible card.
pub const MAX_SUPPORTED_VISIBLE_DEPTH: usize = 8;

/// Fraction of the reference width at which a directional indicator is fully
/// opaque. Independent of the swipe threshold.
pub const INDICATOR_FULL_OPACITY_FRACTION: f32 = 0.25;

/// Front-card tilt at one reference width of drag.
pub const MAX_ROTATION_DEGREES: f32 = 15.0;

/// Scale lost per position behind the front card.
pub const DEPTH_SCALE_STEP: f32 = 0.1;
