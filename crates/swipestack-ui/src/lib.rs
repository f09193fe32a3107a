//! Card projection, stack state and deck wiring for swipestack

mod config;
mod deck;
mod error;
mod overlay;
mod projection;
mod stack;

pub use config::DeckConfig;
pub use deck::{CardFrame, DeckFrame, SwipeCompleted, SwipeDeck};
pub use error::DeckError;
pub use overlay::{indicator_opacity, IndicatorOpacity};
pub use projection::{project_card, CardLayer, ProjectionParams};
pub use stack::{relative_position, CardStack, ImageRef, Item, ItemId};

pub use swipestack_animation::{Extrapolation, SpringSpec};
pub use swipestack_foundation::{
    GesturePhase, PointerEvent, PointerEventKind, SettleOutcome, SwipeDirection,
};
pub use swipestack_ui_graphics::{Color, Point};
