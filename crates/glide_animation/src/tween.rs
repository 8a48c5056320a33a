//! Timed eased transition toward a fixed target
//!
//! Sampled by absolute timestamp rather than accumulated deltas, so a late
//! or dropped frame never desynchronizes progress from wall time. The final
//! sample returns the target exactly, eliminating floating-point drift at
//! the settle position.

use crate::easing::Easing;

/// A fixed-duration transition from a start value to a target value
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    target: f32,
    duration_ms: f32,
    easing: Easing,
    started_at_ms: f64,
}

impl Tween {
    /// Start a transition at `now_ms`
    ///
    /// A non-positive duration completes immediately on the first sample.
    pub fn new(from: f32, target: f32, duration_ms: f32, easing: Easing, now_ms: f64) -> Self {
        Self {
            from,
            target,
            duration_ms,
            easing,
            started_at_ms: now_ms,
        }
    }

    /// The value this transition settles on
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Normalized progress in `[0, 1]` at `now_ms`
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.started_at_ms) as f32;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Sample the eased value at `now_ms`
    ///
    /// Once the duration has elapsed this returns `target` exactly.
    pub fn sample(&self, now_ms: f64) -> f32 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.target;
        }
        self.from + (self.target - self.from) * self.easing.apply(progress)
    }

    /// Whether the duration has fully elapsed at `now_ms`
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
