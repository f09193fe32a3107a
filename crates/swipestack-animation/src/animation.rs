//! Spring-driven animation of a single `f32` signal.
//!
//! An [`Animatable`] owns at most one trajectory for the [`SharedValue`] it governs.
//! Each frame callback advances the trajectory with the closed-form solution of a
//! damped harmonic oscillator (unit mass), so the result does not depend on the
//! frame interval and a positive damping ratio always decays to the target.

use std::cell::RefCell;
use std::rc::Rc;

use swipestack_core::{FrameCallbackRegistration, ReadOnlyValue, RuntimeHandle, SharedValue};
use thiserror::Error;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity (units per second) below which the spring may come to rest.
    pub velocity_threshold: f32,
    /// Distance from the target below which the spring may come to rest.
    pub position_threshold: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringSpecError {
    #[error("damping ratio must be finite and positive, got {0}")]
    DampingRatio(f32),
    #[error("stiffness must be finite and positive, got {0}")]
    Stiffness(f32),
    #[error("rest thresholds must be finite and positive, got velocity {velocity} / position {position}")]
    Threshold { velocity: f32, position: f32 },
}

impl SpringSpec {
    /// Create a critically damped spring with default stiffness.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.1,
            position_threshold: 0.01,
        }
    }

    /// Create a bouncy spring.
    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    /// Create a stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Create a slow critically damped spring.
    pub fn gentle() -> Self {
        Self {
            stiffness: 200.0,
            ..Self::default_spring()
        }
    }

    pub fn with_thresholds(mut self, velocity: f32, position: f32) -> Self {
        self.velocity_threshold = velocity;
        self.position_threshold = position;
        self
    }

    /// Reject parameters that would never settle.
    pub fn validate(&self) -> Result<(), SpringSpecError> {
        if !self.damping_ratio.is_finite() || self.damping_ratio <= 0.0 {
            return Err(SpringSpecError::DampingRatio(self.damping_ratio));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(SpringSpecError::Stiffness(self.stiffness));
        }
        let thresholds = [self.velocity_threshold, self.position_threshold];
        if thresholds.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(SpringSpecError::Threshold {
                velocity: self.velocity_threshold,
                position: self.position_threshold,
            });
        }
        Ok(())
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Position and velocity of a spring at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

/// Analytic damped-harmonic-oscillator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSimulation {
    spec: SpringSpec,
    target: f32,
}

impl SpringSimulation {
    pub fn new(spec: SpringSpec, target: f32) -> Self {
        Self { spec, target }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance `state` by `dt_seconds`.
    pub fn step(&self, state: SpringState, dt_seconds: f32) -> SpringState {
        let t = f64::from(dt_seconds.max(0.0));
        let x0 = f64::from(state.value - self.target);
        let v0 = f64::from(state.velocity);
        let omega = f64::from(self.spec.stiffness).sqrt();
        let zeta = f64::from(self.spec.damping_ratio);

        let (x, v) = if (zeta - 1.0).abs() < 1e-6 {
            let decay = (-omega * t).exp();
            let b = v0 + omega * x0;
            ((x0 + b * t) * decay, (v0 - omega * b * t) * decay)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let b = (v0 + zeta * omega * x0) / damped;
            let x = decay * (x0 * cos + b * sin);
            let v = decay * (v0 * cos - (zeta * omega * v0 + omega * omega * x0) / damped * sin);
            (x, v)
        } else {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let c2 = (r1 * x0 - v0) / (r1 - r2);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        };

        SpringState {
            value: self.target + x as f32,
            velocity: v as f32,
        }
    }

    pub fn is_at_rest(&self, state: SpringState) -> bool {
        state.velocity.abs() < self.spec.velocity_threshold
            && (state.value - self.target).abs() < self.spec.position_threshold
    }
}

/// How a trajectory ended. Delivered exactly once per [`Animatable::animate_to_then`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The value came to rest on the target.
    Finished,
    /// The trajectory was replaced, snapped or stopped before settling.
    Interrupted,
}

impl AnimationEnd {
    pub fn is_finished(self) -> bool {
        self == AnimationEnd::Finished
    }
}

type EndCallback = Box<dyn FnOnce(AnimationEnd) + 'static>;

/// Spring resolver for one shared `f32` signal.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    label: &'static str,
    value: SharedValue<f32>,
    runtime: RuntimeHandle,
    state: SpringState,
    simulation: SpringSimulation,
    running: bool,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

impl AnimatableInner {
    fn interrupt(&mut self) -> Option<EndCallback> {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.running = false;
        self.last_frame_nanos = None;
        self.on_end.take()
    }
}

impl Animatable {
    /// Govern `value`; the animatable becomes its only animated writer.
    pub fn new(label: &'static str, value: SharedValue<f32>, runtime: RuntimeHandle) -> Self {
        let initial = value.get();
        let inner = AnimatableInner {
            label,
            value,
            runtime,
            state: SpringState {
                value: initial,
                velocity: 0.0,
            },
            simulation: SpringSimulation::new(SpringSpec::default(), initial),
            running: false,
            last_frame_nanos: None,
            registration: None,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Spring towards `target`, starting from the current value and velocity.
    ///
    /// A trajectory already in flight is retargeted without a jump; its callback is
    /// told [`AnimationEnd::Interrupted`].
    pub fn animate_to(&self, target: f32, spec: SpringSpec) {
        self.start(target, spec, None);
    }

    /// [`Animatable::animate_to`], reporting the outcome to `on_end` from a later
    /// frame tick.
    pub fn animate_to_then(
        &self,
        target: f32,
        spec: SpringSpec,
        on_end: impl FnOnce(AnimationEnd) + 'static,
    ) {
        self.start(target, spec, Some(Box::new(on_end)));
    }

    fn start(&self, target: f32, spec: SpringSpec, on_end: Option<EndCallback>) {
        let replaced = {
            let mut inner = self.inner.borrow_mut();
            let replaced = inner.on_end.take();
            inner.simulation = SpringSimulation::new(spec, target);
            inner.on_end = on_end;
            if !inner.running {
                inner.last_frame_nanos = None;
            }
            inner.running = true;
            log::debug!(
                "{}: spring {:.2} -> {:.2} (v={:.2})",
                inner.label,
                inner.state.value,
                target,
                inner.state.velocity
            );
            replaced
        };
        Self::schedule_frame(&self.inner);
        if let Some(callback) = replaced {
            callback(AnimationEnd::Interrupted);
        }
    }

    /// Stop any trajectory and write `value` immediately.
    pub fn snap_to(&self, value: f32) {
        let (interrupted, signal) = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupt();
            inner.state = SpringState {
                value,
                velocity: 0.0,
            };
            inner.simulation = SpringSimulation::new(inner.simulation.spec, value);
            (interrupted, inner.value.clone())
        };
        signal.set(value);
        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
    }

    /// Stop any trajectory where it is.
    pub fn stop(&self) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            inner.state.velocity = 0.0;
            inner.interrupt()
        };
        if let Some(callback) = interrupted {
            callback(AnimationEnd::Interrupted);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().simulation.target()
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().state.velocity
    }

    pub fn value(&self) -> ReadOnlyValue<f32> {
        self.inner.borrow().value.read_only()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            inner.runtime.frame_clock()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let (signal, written, finished) = {
            let mut inner = this.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.disarm();
            }
            if !inner.running {
                return;
            }

            let Some(last) = inner.last_frame_nanos.replace(frame_time_nanos) else {
                // First tick only anchors the clock.
                drop(inner);
                Self::schedule_frame(this);
                return;
            };

            let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
            let next = inner.simulation.step(inner.state, dt);
            let finished = if inner.simulation.is_at_rest(next) {
                inner.state = SpringState {
                    value: inner.simulation.target(),
                    velocity: 0.0,
                };
                inner.running = false;
                inner.last_frame_nanos = None;
                log::debug!("{}: settled at {:.2}", inner.label, inner.state.value);
                Some(inner.on_end.take())
            } else {
                inner.state = next;
                log::trace!(
                    "{}: tick dt={dt:.4}s value={:.3} v={:.3}",
                    inner.label,
                    next.value,
                    next.velocity
                );
                None
            };
            (inner.value.clone(), inner.state.value, finished)
        };

        if finished.is_none() {
            Self::schedule_frame(this);
        }
        signal.set(written);
        if let Some(Some(callback)) = finished {
            callback(AnimationEnd::Finished);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
