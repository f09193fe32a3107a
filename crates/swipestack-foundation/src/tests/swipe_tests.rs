use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use swipestack_core::{Runtime, SharedValue, FRAME_NANOS_60HZ};

const W: f32 = 375.0;

struct Harness {
    runtime: Runtime,
    offset: SharedValue<f32>,
    gate: SharedValue<f32>,
    completions: Rc<RefCell<Vec<SwipeDirection>>>,
    session: SwipeGestureSession,
    frame_time: u64,
}

impl Harness {
    fn new() -> Self {
        let runtime = Runtime::default();
        let offset = SharedValue::new(0.0f32);
        let gate = SharedValue::new(0.0f32);
        let completions = Rc::new(RefCell::new(Vec::new()));
        let session = {
            let completions = Rc::clone(&completions);
            SwipeGestureSession::new(
                SwipeConfig::new(W),
                Animatable::new("offset", offset.clone(), runtime.handle()),
                Animatable::new("gate", gate.clone(), runtime.handle()),
                move |direction| completions.borrow_mut().push(direction),
            )
        };
        Self {
            runtime,
            offset,
            gate,
            completions,
            session,
            frame_time: 0,
        }
    }

    fn drag(&self, to: f32) {
        assert!(self.session.pointer_input(&PointerEvent::down(100.0, 300.0)));
        assert!(self.session.pointer_input(&PointerEvent::moved(100.0 + to / 2.0, 300.0)));
        assert!(self.session.pointer_input(&PointerEvent::moved(100.0 + to, 300.0)));
    }

    fn release(&self) -> bool {
        let x = 100.0 + self.offset.get();
        self.session.pointer_input(&PointerEvent::up(x, 300.0))
    }

    fn frame(&mut self) {
        self.frame_time += FRAME_NANOS_60HZ;
        self.runtime.drain_frame_callbacks(self.frame_time);
    }

    fn settle(&mut self) {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            self.frame();
            frames += 1;
            assert!(frames < 1_000, "spring did not settle");
        }
    }
}

#[test]
fn decide_uses_strict_threshold() {
    let config = SwipeConfig::new(W);
    assert_eq!(config.threshold_distance(), 93.75);
    assert_eq!(config.decide(93.75), SettleOutcome::Cancel);
    assert_eq!(config.decide(-93.75), SettleOutcome::Cancel);
    assert_eq!(config.decide(93.76), SettleOutcome::Commit(SwipeDirection::Right));
    assert_eq!(config.decide(-200.0), SettleOutcome::Commit(SwipeDirection::Left));
    assert_eq!(config.decide(0.0), SettleOutcome::Cancel);
}

#[test]
fn drag_writes_translation_verbatim_and_raises_gate() {
    let harness = Harness::new();
    harness.drag(-420.0);

    assert_eq!(harness.offset.get(), -420.0);
    assert_eq!(harness.gate.get(), 1.0);
    assert!(matches!(
        harness.session.phase(),
        GesturePhase::Dragging { pointer: 0, .. }
    ));
}

#[test]
fn release_past_threshold_flies_off_then_completes_once() {
    let mut harness = Harness::new();
    harness.drag(200.0);
    assert!(harness.release());

    assert_eq!(
        harness.session.phase(),
        GesturePhase::Settling(SettleOutcome::Commit(SwipeDirection::Right))
    );
    assert!(harness.completions.borrow().is_empty());

    harness.frame();
    harness.frame();
    assert!(harness.offset.get() > 200.0);
    assert_eq!(harness.gate.get(), 1.0, "gate stays up during fly-off");

    harness.settle();

    assert_eq!(harness.offset.get(), W * 1.5);
    assert_eq!(harness.gate.get(), 0.0);
    assert_eq!(harness.completions.borrow().as_slice(), &[SwipeDirection::Right]);
    assert_eq!(harness.session.phase(), GesturePhase::Idle);
}

#[test]
fn left_commit_flies_to_negative_target() {
    let mut harness = Harness::new();
    harness.drag(-150.0);
    harness.release();
    harness.settle();

    assert_eq!(harness.offset.get(), -W * 1.5);
    assert_eq!(harness.completions.borrow().as_slice(), &[SwipeDirection::Left]);
}

#[test]
fn release_below_threshold_springs_back_without_completion() {
    let mut harness = Harness::new();
    harness.drag(50.0);
    harness.release();

    assert_eq!(
        harness.session.phase(),
        GesturePhase::Settling(SettleOutcome::Cancel)
    );
    harness.settle();

    assert_eq!(harness.offset.get(), 0.0);
    assert_eq!(harness.gate.get(), 0.0);
    assert!(harness.completions.borrow().is_empty());
    assert_eq!(harness.session.phase(), GesturePhase::Idle);
}

#[test]
fn pointer_cancel_springs_back_even_past_threshold() {
    let mut harness = Harness::new();
    harness.drag(300.0);
    assert!(harness.session.pointer_input(&PointerEvent::cancel()));
    harness.settle();

    assert_eq!(harness.offset.get(), 0.0);
    assert!(harness.completions.borrow().is_empty());
}

#[test]
fn new_pointer_is_rejected_while_card_flies_off() {
    let mut harness = Harness::new();
    harness.drag(250.0);
    harness.release();
    harness.frame();

    let second = PointerEvent::down(10.0, 10.0).with_id(7);
    assert!(!harness.session.pointer_input(&second));
    assert!(!second.is_consumed());

    harness.settle();
    assert_eq!(harness.completions.borrow().len(), 1);
}

#[test]
fn grabbing_a_spring_back_interrupts_it() {
    let mut harness = Harness::new();
    harness.drag(80.0);
    harness.release();
    harness.frame();
    harness.frame();
    let mid_flight = harness.offset.get();
    assert!(mid_flight > 0.0 && mid_flight < 80.0);

    let down = PointerEvent::down(0.0, 0.0).with_id(3);
    assert!(harness.session.pointer_input(&down));
    assert!(down.is_consumed());
    assert_eq!(harness.offset.get(), mid_flight, "interrupt holds the value");
    assert_eq!(harness.gate.get(), 1.0);

    harness.settle();
    assert_eq!(harness.offset.get(), mid_flight, "no spring runs while dragging");

    harness
        .session
        .pointer_input(&PointerEvent::moved(-130.0, 0.0).with_id(3));
    harness
        .session
        .pointer_input(&PointerEvent::up(-130.0, 0.0).with_id(3));
    harness.settle();

    assert_eq!(harness.completions.borrow().as_slice(), &[SwipeDirection::Left]);
}

#[test]
fn moves_from_other_pointers_are_ignored() {
    let harness = Harness::new();
    harness.drag(40.0);

    let stray = PointerEvent::moved(900.0, 0.0).with_id(9);
    assert!(!harness.session.pointer_input(&stray));
    assert_eq!(harness.offset.get(), 40.0);
}

#[test]
fn events_without_a_session_are_not_consumed() {
    let harness = Harness::new();
    let up = PointerEvent::up(0.0, 0.0);
    assert!(!harness.session.pointer_input(&up));
    assert!(!harness.session.pointer_input(&PointerEvent::cancel()));
    assert!(!up.is_consumed());
}
