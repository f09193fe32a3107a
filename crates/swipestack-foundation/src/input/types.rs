use std::cell::Cell;

use swipestack_ui_graphics::Point;

/// Identifies one finger or mouse button for the length of a press.
pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (capture lost, system gesture).
    Cancel,
}

/// One pointer sample in the deck's coordinate space.
///
/// Positions are absolute; the gesture session turns them into a translation
/// relative to the `Down` that started the press.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    consumed: Cell<bool>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: PointerId::default(),
            kind,
            position,
            consumed: Cell::new(false),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    /// Cancellation carries no meaningful position.
    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO)
    }

    pub fn with_id(self, id: PointerId) -> Self {
        Self { id, ..self }
    }

    /// Mark the event as handled so nothing underneath reacts to it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
