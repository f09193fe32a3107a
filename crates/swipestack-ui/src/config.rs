use swipestack_animation::{Extrapolation, SpringSpec};
use swipestack_foundation::gesture_constants::{
    DEFAULT_FLY_OFF_MULTIPLIER, DEFAULT_MAX_VISIBLE_DEPTH, DEFAULT_SWIPE_THRESHOLD_FRACTION,
    INDICATOR_FULL_OPACITY_FRACTION, MAX_SUPPORTED_VISIBLE_DEPTH,
};
use swipestack_foundation::SwipeConfig;

use crate::error::DeckError;
use crate::projection::ProjectionParams;

/// Tunables for a [`crate::SwipeDeck`].
///
/// `reference_width` is captured once when the deck is built; every distance
/// (threshold, fly-off, rotation and scale ranges) is derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckConfig {
    pub reference_width: f32,
    pub swipe_threshold_fraction: f32,
    pub fly_off_multiplier: f32,
    pub max_visible_depth: usize,
    pub offset_spring: SpringSpec,
    pub indicator_spring: SpringSpec,
    /// Front-card tilt past one reference width of drag.
    pub rotation_extrapolation: Extrapolation,
}

impl DeckConfig {
    pub fn new(reference_width: f32) -> Self {
        let swipe = SwipeConfig::new(reference_width);
        Self {
            reference_width,
            swipe_threshold_fraction: DEFAULT_SWIPE_THRESHOLD_FRACTION,
            fly_off_multiplier: DEFAULT_FLY_OFF_MULTIPLIER,
            max_visible_depth: DEFAULT_MAX_VISIBLE_DEPTH,
            offset_spring: swipe.offset_spring,
            indicator_spring: swipe.indicator_spring,
            rotation_extrapolation: Extrapolation::Extend,
        }
    }

    pub fn with_swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    pub fn with_fly_off_multiplier(mut self, multiplier: f32) -> Self {
        self.fly_off_multiplier = multiplier;
        self
    }

    pub fn with_max_visible_depth(mut self, depth: usize) -> Self {
        self.max_visible_depth = depth;
        self
    }

    pub fn with_offset_spring(mut self, spring: SpringSpec) -> Self {
        self.offset_spring = spring;
        self
    }

    pub fn with_indicator_spring(mut self, spring: SpringSpec) -> Self {
        self.indicator_spring = spring;
        self
    }

    pub fn with_rotation_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.rotation_extrapolation = extrapolation;
        self
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if !self.reference_width.is_finite() || self.reference_width <= 0.0 {
            return Err(DeckError::InvalidReferenceWidth(self.reference_width));
        }
        let fraction = self.swipe_threshold_fraction;
        if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
            return Err(DeckError::InvalidThresholdFraction(fraction));
        }
        if !self.fly_off_multiplier.is_finite() || self.fly_off_multiplier <= 0.0 {
            return Err(DeckError::InvalidFlyOffMultiplier(self.fly_off_multiplier));
        }
        if !(1..=MAX_SUPPORTED_VISIBLE_DEPTH).contains(&self.max_visible_depth) {
            return Err(DeckError::InvalidVisibleDepth {
                depth: self.max_visible_depth,
                max: MAX_SUPPORTED_VISIBLE_DEPTH,
            });
        }
        self.offset_spring.validate()?;
        self.indicator_spring.validate()?;
        Ok(())
    }

    pub fn threshold_distance(&self) -> f32 {
        self.reference_width * self.swipe_threshold_fraction
    }

    /// Drag distance at which an indicator reaches full opacity.
    pub fn indicator_distance(&self) -> f32 {
        self.reference_width * INDICATOR_FULL_OPACITY_FRACTION
    }

    pub fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig {
            reference_width: self.reference_width,
            swipe_threshold_fraction: self.swipe_threshold_fraction,
            fly_off_multiplier: self.fly_off_multiplier,
            offset_spring: self.offset_spring,
            indicator_spring: self.indicator_spring,
        }
    }

    pub fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            reference_width: self.reference_width,
            max_visible_depth: self.max_visible_depth,
            rotation_extrapolation: self.rotation_extrapolation,
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
