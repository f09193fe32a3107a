use swipestack_animation::SpringSpecError;
use thiserror::Error;

use crate::stack::ItemId;

/// Configuration rejected when a deck is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    #[error("a card deck needs at least one item")]
    EmptyStack,
    #[error("item id {0} appears more than once")]
    DuplicateItemId(ItemId),
    #[error("reference width must be finite and positive, got {0}")]
    InvalidReferenceWidth(f32),
    #[error("swipe threshold fraction must be within (0, 1], got {0}")]
    InvalidThresholdFraction(f32),
    #[error("fly-off multiplier must be finite and positive, got {0}")]
    InvalidFlyOffMultiplier(f32),
    #[error("max visible depth must be within 1..={max}, got {depth}")]
    InvalidVisibleDepth { depth: usize, max: usize },
    #[error("invalid spring: {0}")]
    InvalidSpring(#[from] SpringSpecError),
}
