use super::*;
use crate::FrameCallbackRegistration;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn frame_callbacks_run_once_with_frame_time() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };
    assert!(registration.is_active());
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(42);
    runtime.drain_frame_callbacks(84);

    assert_eq!(seen.borrow().as_slice(), &[42]);
    assert!(!runtime.needs_frame());
    assert_eq!(runtime.last_frame_nanos(), Some(84));
    registration.disarm();
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(RefCell::new(false));

    {
        let fired = Rc::clone(&fired);
        let registration = runtime
            .frame_clock()
            .with_frame_nanos(move |_| *fired.borrow_mut() = true);
        drop(registration);
    }

    assert!(!runtime.needs_frame());
    runtime.drain_frame_callbacks(1);
    assert!(!*fired.borrow());
}

#[test]
fn callback_cancelled_mid_drain_is_skipped() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let victim: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let first = {
        let victim = Rc::clone(&victim);
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| {
            fired.borrow_mut().push("first");
            if let Some(registration) = victim.borrow_mut().take() {
                registration.cancel();
            }
        })
    };
    let second = {
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| fired.borrow_mut().push("second"))
    };
    *victim.borrow_mut() = Some(second);

    runtime.drain_frame_callbacks(16);

    assert_eq!(fired.borrow().as_slice(), &["first"]);
    first.disarm();
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let times = Rc::new(RefCell::new(Vec::new()));

    {
        let times = Rc::clone(&times);
        let registrar = handle.clone();
        registrar.register_frame_callback(move |time| {
            times.borrow_mut().push(time);
            let times = Rc::clone(&times);
            handle.register_frame_callback(move |time| times.borrow_mut().push(time));
        });
    }

    runtime.drain_frame_callbacks(10);
    assert_eq!(times.borrow().as_slice(), &[10]);
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(20);
    assert_eq!(times.borrow().as_slice(), &[10, 20]);
    assert!(!runtime.needs_frame());
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
}

struct CountingScheduler {
    requests: Cell<usize>,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn scheduler_is_asked_once_per_idle_to_busy_transition() {
    let scheduler = Rc::new(CountingScheduler {
        requests: Cell::new(0),
    });
    let runtime = Runtime::with_scheduler(scheduler.clone());
    let clock = runtime.frame_clock();

    let first = clock.with_frame_nanos(|_| {});
    let second = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 1);

    runtime.drain_frame_callbacks(16);
    first.disarm();
    second.disarm();
    assert!(!runtime.needs_frame());

    let third = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 2);
    third.cancel();
    assert!(!runtime.needs_frame());
}
