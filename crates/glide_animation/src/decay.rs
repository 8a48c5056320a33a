//! Velocity decay integrator for inertial coasting
//!
//! After a drag release, position keeps moving under a geometrically
//! decaying velocity. Integration uses a fixed nominal frame length rather
//! than measured deltas: each `step` is one frame of coasting, which keeps
//! worst-case coast distance bounded and the trajectory fully deterministic.

/// Configuration for a decay animation
#[derive(Clone, Copy, Debug)]
pub struct DecayConfig {
    /// Per-frame velocity multiplier (0.0-1.0, lower stops sooner)
    pub friction: f32,
    /// Velocity magnitude below which coasting settles, in px/ms
    pub min_velocity: f32,
    /// Velocity magnitude cap applied at release, in px/ms
    pub max_velocity: f32,
    /// Nominal frame length used for integration, in ms
    pub frame_ms: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            friction: 0.95,
            min_velocity: 0.1,
            max_velocity: 3.0,
            frame_ms: 16.0,
        }
    }
}

/// A decaying-velocity animator
#[derive(Clone, Copy, Debug)]
pub struct Decay {
    velocity: f32,
    config: DecayConfig,
}

impl Decay {
    /// Begin coasting with the given release velocity, clamped to the
    /// configured maximum magnitude
    pub fn new(velocity: f32, config: DecayConfig) -> Self {
        Self {
            velocity: velocity.clamp(-config.max_velocity, config.max_velocity),
            config,
        }
    }

    /// Current velocity in px/ms
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advance one frame; returns the displacement to apply
    pub fn step(&mut self) -> f32 {
        self.velocity *= self.config.friction;
        self.velocity * self.config.frame_ms
    }

    /// Whether velocity has dropped below the settle threshold
    pub fn is_settled(&self) -> bool {
        self.velocity.abs() <= self.config.min_velocity
    }
}
