use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

/// Host hook told whenever the runtime goes from idle to wanting a frame.
pub trait FrameScheduler {
    fn request_frame(&self);
}

struct RuntimeInner {
    scheduler: Option<Rc<dyn FrameScheduler>>,
    // Ids only grow, so key order is registration order.
    pending: RefCell<BTreeMap<FrameCallbackId, FrameCallback>>,
    next_id: Cell<FrameCallbackId>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl RuntimeInner {
    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let was_idle = {
            let mut pending = self.pending.borrow_mut();
            let was_idle = pending.is_empty();
            pending.insert(id, callback);
            was_idle
        };
        if was_idle {
            if let Some(scheduler) = &self.scheduler {
                scheduler.request_frame();
            }
        }
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        self.pending.borrow_mut().remove(&id);
    }

    fn drain(&self, frame_time_nanos: u64) {
        self.last_frame_nanos.set(Some(frame_time_nanos));
        // Anything registered while draining belongs to the next frame.
        let cutoff = self.next_id.get();
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                match pending.first_key_value() {
                    Some((id, _)) if *id < cutoff => pending.pop_first(),
                    _ => None,
                }
            };
            let Some((_, callback)) = next else {
                break;
            };
            callback(frame_time_nanos);
        }
    }
}

/// Owner of the frame-callback queue.
///
/// The host calls [`Runtime::drain_frame_callbacks`] once per rendered frame with a
/// monotonically increasing timestamp in nanoseconds. A callback cancelled by an
/// earlier callback of the same drain does not run.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_scheduler(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self::build(Some(scheduler))
    }

    fn build(scheduler: Option<Rc<dyn FrameScheduler>>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                scheduler,
                pending: RefCell::new(BTreeMap::new()),
                next_id: Cell::new(1),
                last_frame_nanos: Cell::new(None),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether any frame callback is waiting.
    pub fn needs_frame(&self) -> bool {
        !self.inner.pending.borrow().is_empty()
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.drain(frame_time_nanos);
    }

    /// Timestamp of the most recently drained frame.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner.last_frame_nanos.get()
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak handle to a [`Runtime`]; operations on a dropped runtime are no-ops.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// `None` once the runtime is gone.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let inner = self.inner.upgrade()?;
        Some(inner.register(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel(id);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
