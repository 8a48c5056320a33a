//! Carousel behavior configuration

use glide_animation::DecayConfig;

/// Configuration for carousel motion and timing
#[derive(Clone, Copy, Debug)]
pub struct CarouselConfig {
    /// Inertia physics (friction, velocity thresholds, nominal frame length)
    pub decay: DecayConfig,
    /// Duration of the eased snap transition, in ms
    pub snap_duration_ms: f32,
    /// Damping factor applied to drag displacement beyond the translation
    /// bounds (0.0 = hard wall, 1.0 = no resistance)
    pub overscroll_resistance: f32,
    /// Quiet window for coalescing resize recomputation, in ms
    pub resize_debounce_ms: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            decay: DecayConfig::default(),
            snap_duration_ms: 350.0,
            overscroll_resistance: 0.3,
            resize_debounce_ms: 150.0,
        }
    }
}

impl CarouselConfig {
    /// Create config with inertial coasting disabled; every release snaps
    /// directly to the nearest point
    pub fn no_inertia() -> Self {
        Self {
            decay: DecayConfig {
                min_velocity: f32::MAX,
                ..DecayConfig::default()
            },
            ..Default::default()
        }
    }

    /// Create config with a quicker snap transition
    pub fn snappy() -> Self {
        Self {
            snap_duration_ms: 200.0,
            ..Default::default()
        }
    }
}
