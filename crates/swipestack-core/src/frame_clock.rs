//! One-shot frame callbacks tied to a registration handle.

use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Requests callbacks on the next drained frame of a runtime.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Run `callback` with the frame time of the next drain.
    ///
    /// The returned registration must be kept alive; dropping it withdraws the
    /// request. Against a dropped runtime the registration is inactive and the
    /// callback never runs.
    #[must_use = "dropping the registration cancels the frame callback"]
    pub fn with_frame_nanos(&self, callback: impl FnOnce(u64) + 'static) -> FrameCallbackRegistration {
        let id = self.runtime.register_frame_callback(callback);
        if id.is_none() {
            log::trace!("frame clock: runtime gone, callback discarded");
        }
        FrameCallbackRegistration {
            runtime: self.runtime.clone(),
            id,
        }
    }
}

/// Pending frame callback. Dropping or cancelling it withdraws the callback,
/// including one whose frame is being drained but has not reached it yet.
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        self.withdraw();
    }

    /// Let go of the handle without cancelling. Called from the callback itself,
    /// which has already been taken off the queue.
    pub fn disarm(mut self) {
        self.id = None;
    }

    fn withdraw(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.withdraw();
    }
}
