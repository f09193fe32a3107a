//! Per-card visual transform derived from the shared drag offset.
//!
//! | position | z | scale | alpha | rotation | translation |
//! |---|---|---|---|---|---|
//! | 0 | depth | 1.0 | 1 | offset over [-W, 0, W] -> [-15, 0, 15] deg | offset |
//! | p in 1..depth | depth - p | abs(offset) over [0, W] -> [1 - 0.1p, 1 - 0.1(p - 1)], clamped | 1 | 0 | 0 |
//! | >= depth | -1 | - | 0 | - | - |
//!
//! With the default depth of 3 that is 0.9..1.0 for the middle card and
//! 0.8..0.9 for the back card.

use swipestack_animation::{interpolate, interpolate_clamped, Extrapolation};
use swipestack_foundation::gesture_constants::{DEPTH_SCALE_STEP, MAX_ROTATION_DEGREES};

/// Graphics layer for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayer {
    pub translation_x: f32,
    pub rotation_degrees: f32,
    pub scale: f32,
    /// Higher is nearer the viewer.
    pub z_index: i32,
    pub alpha: f32,
}

impl CardLayer {
    pub const HIDDEN: CardLayer = CardLayer {
        translation_x: 0.0,
        rotation_degrees: 0.0,
        scale: 1.0,
        z_index: -1,
        alpha: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

impl Default for CardLayer {
    fn default() -> Self {
        Self {
            translation_x: 0.0,
            rotation_degrees: 0.0,
            scale: 1.0,
            z_index: 0,
            alpha: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    pub reference_width: f32,
    pub max_visible_depth: usize,
    pub rotation_extrapolation: Extrapolation,
}

/// Pure projection of `(relative_position, drag_offset)` to a [`CardLayer`].
pub fn project_card(relative_position: usize, drag_offset: f32, params: &ProjectionParams) -> CardLayer {
    let depth = params.max_visible_depth;
    if relative_position >= depth {
        return CardLayer::HIDDEN;
    }
    let width = params.reference_width;
    let z_index = (depth - relative_position) as i32;

    if relative_position == 0 {
        let rotation_degrees = interpolate(
            drag_offset,
            &[-width, 0.0, width],
            &[-MAX_ROTATION_DEGREES, 0.0, MAX_ROTATION_DEGREES],
            params.rotation_extrapolation,
        );
        return CardLayer {
            translation_x: drag_offset,
            rotation_degrees,
            z_index,
            ..CardLayer::default()
        };
    }

    let at_rest = 1.0 - DEPTH_SCALE_STEP * relative_position as f32;
    let promoted = at_rest + DEPTH_SCALE_STEP;
    CardLayer {
        scale: interpolate_clamped(drag_offset.abs(), &[0.0, width], &[at_rest, promoted]),
        z_index,
        ..CardLayer::default()
    }
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
