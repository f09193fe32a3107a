//! Horizontal swipe recogniser for the front card of a deck.
//!
//! The session writes only two signals: the drag offset (verbatim translation while
//! dragging, spring-driven while settling) and the indicator gate. A release past
//! the threshold flies the card off and reports the direction once the spring
//! settles; anything else springs both signals back to rest.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipestack_animation::{Animatable, AnimationEnd, SpringSpec};
use swipestack_ui_graphics::Point;

use crate::gesture_constants::{DEFAULT_FLY_OFF_MULTIPLIER, DEFAULT_SWIPE_THRESHOLD_FRACTION};
use crate::input::types::{PointerEvent, PointerEventKind, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    fn of(offset: f32) -> Self {
        if offset > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    Commit(SwipeDirection),
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase {
    Idle,
    Dragging { pointer: PointerId, origin: Point },
    Settling(SettleOutcome),
}

/// Distances and springs used by a [`SwipeGestureSession`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub reference_width: f32,
    pub swipe_threshold_fraction: f32,
    pub fly_off_multiplier: f32,
    pub offset_spring: SpringSpec,
    pub indicator_spring: SpringSpec,
}

impl SwipeConfig {
    pub fn new(reference_width: f32) -> Self {
        Self {
            reference_width,
            swipe_threshold_fraction: DEFAULT_SWIPE_THRESHOLD_FRACTION,
            fly_off_multiplier: DEFAULT_FLY_OFF_MULTIPLIER,
            offset_spring: SpringSpec::default(),
            indicator_spring: SpringSpec::default().with_thresholds(0.01, 0.001),
        }
    }

    pub fn threshold_distance(&self) -> f32 {
        self.reference_width * self.swipe_threshold_fraction
    }

    pub fn fly_off_distance(&self) -> f32 {
        self.reference_width * self.fly_off_multiplier
    }

    /// Commit when the release offset is strictly beyond the threshold.
    pub fn decide(&self, offset: f32) -> SettleOutcome {
        if offset.abs() > self.threshold_distance() {
            SettleOutcome::Commit(SwipeDirection::of(offset))
        } else {
            SettleOutcome::Cancel
        }
    }
}

type CompletionCallback = Rc<dyn Fn(SwipeDirection)>;

struct SessionInner {
    config: SwipeConfig,
    phase: GesturePhase,
    offset: Animatable,
    gate: Animatable,
    on_complete: CompletionCallback,
}

/// Single gesture session for a deck. Cloning shares the session.
#[derive(Clone)]
pub struct SwipeGestureSession {
    inner: Rc<RefCell<SessionInner>>,
}

impl SwipeGestureSession {
    /// `offset` and `gate` must govern the deck's drag offset and indicator gate.
    /// `on_complete` runs once per committed swipe, after the fly-off settles.
    pub fn new(
        config: SwipeConfig,
        offset: Animatable,
        gate: Animatable,
        on_complete: impl Fn(SwipeDirection) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                config,
                phase: GesturePhase::Idle,
                offset,
                gate,
                on_complete: Rc::new(on_complete),
            })),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.inner.borrow().phase
    }

    pub fn config(&self) -> SwipeConfig {
        self.inner.borrow().config
    }

    /// A card that is flying off keeps the session; a spring-back may be grabbed.
    pub fn accepts_new_gesture(&self) -> bool {
        matches!(
            self.inner.borrow().phase,
            GesturePhase::Idle | GesturePhase::Settling(SettleOutcome::Cancel)
        )
    }

    /// Route one pointer event. Returns whether the session used it; used events
    /// are consumed.
    pub fn pointer_input(&self, event: &PointerEvent) -> bool {
        let handled = match event.kind {
            PointerEventKind::Down => self.start(event.id, event.position),
            PointerEventKind::Move => match self.phase() {
                GesturePhase::Dragging { pointer, origin } if pointer == event.id => {
                    self.update((event.position - origin).x)
                }
                _ => false,
            },
            PointerEventKind::Up => match self.phase() {
                GesturePhase::Dragging { pointer, origin } if pointer == event.id => {
                    self.update((event.position - origin).x);
                    self.end()
                }
                _ => false,
            },
            PointerEventKind::Cancel => self.cancel(),
        };
        if handled {
            event.consume();
        }
        handled
    }

    /// Begin dragging. Raises the indicator gate and halts a spring-back in place.
    pub fn start(&self, pointer: PointerId, origin: Point) -> bool {
        if !self.accepts_new_gesture() {
            log::debug!("swipe: rejected pointer {pointer} while {:?}", self.phase());
            return false;
        }
        let (offset, gate) = {
            let mut inner = self.inner.borrow_mut();
            inner.phase = GesturePhase::Dragging { pointer, origin };
            (inner.offset.clone(), inner.gate.clone())
        };
        offset.stop();
        gate.snap_to(1.0);
        log::debug!("swipe: start pointer {pointer} at {:.1}", origin.x);
        true
    }

    /// Write the cumulative horizontal translation verbatim.
    pub fn update(&self, translation_x: f32) -> bool {
        let offset = {
            let inner = self.inner.borrow();
            if !matches!(inner.phase, GesturePhase::Dragging { .. }) {
                return false;
            }
            inner.offset.clone()
        };
        offset.snap_to(translation_x);
        true
    }

    /// Release: commit or cancel based on the current offset.
    pub fn end(&self) -> bool {
        let released_at = {
            let inner = self.inner.borrow();
            if !matches!(inner.phase, GesturePhase::Dragging { .. }) {
                return false;
            }
            inner.offset.value().get()
        };
        let outcome = self.config().decide(released_at);
        log::debug!("swipe: released at {released_at:.1} -> {outcome:?}");
        self.settle(outcome);
        true
    }

    /// Pointer capture lost: always spring back.
    pub fn cancel(&self) -> bool {
        if !matches!(self.phase(), GesturePhase::Dragging { .. }) {
            return false;
        }
        log::debug!("swipe: pointer cancelled");
        self.settle(SettleOutcome::Cancel);
        true
    }

    fn settle(&self, outcome: SettleOutcome) {
        let (config, offset, gate) = {
            let mut inner = self.inner.borrow_mut();
            inner.phase = GesturePhase::Settling(outcome);
            (inner.config, inner.offset.clone(), inner.gate.clone())
        };
        let session = Rc::downgrade(&self.inner);
        match outcome {
            SettleOutcome::Commit(direction) => {
                let target = direction.sign() * config.fly_off_distance();
                offset.animate_to_then(target, config.offset_spring, move |end| {
                    Self::on_settled(&session, outcome, end);
                });
            }
            SettleOutcome::Cancel => {
                offset.animate_to_then(0.0, config.offset_spring, move |end| {
                    Self::on_settled(&session, outcome, end);
                });
                gate.animate_to(0.0, config.indicator_spring);
            }
        }
    }

    fn on_settled(session: &Weak<RefCell<SessionInner>>, outcome: SettleOutcome, end: AnimationEnd) {
        let Some(session) = session.upgrade() else {
            return;
        };
        let (gate, on_complete) = {
            let mut inner = session.borrow_mut();
            // A new drag may already own the session.
            if inner.phase != GesturePhase::Settling(outcome) {
                return;
            }
            inner.phase = GesturePhase::Idle;
            (inner.gate.clone(), Rc::clone(&inner.on_complete))
        };
        match (outcome, end) {
            (SettleOutcome::Commit(direction), AnimationEnd::Finished) => {
                gate.snap_to(0.0);
                log::debug!("swipe: committed {direction:?}");
                on_complete(direction);
            }
            (SettleOutcome::Commit(direction), AnimationEnd::Interrupted) => {
                gate.snap_to(0.0);
                log::debug!("swipe: fly-off {direction:?} interrupted, no completion");
            }
            (SettleOutcome::Cancel, _) => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/swipe_tests.rs"]
mod tests;
