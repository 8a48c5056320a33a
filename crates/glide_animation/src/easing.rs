//! Easing curves for timed transitions

/// Easing function applied to normalized animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Cubic acceleration from rest
    CubicIn,
    /// Cubic deceleration into the target (the carousel's settle curve)
    #[default]
    CubicOut,
    /// Cubic acceleration then deceleration
    CubicInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the eased curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_cubic_out_matches_closed_form() {
        // 1 - (1 - t)^3
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Easing::CubicOut.apply(0.25) - (1.0 - 0.75f32.powi(3))).abs() < 1e-6);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(2.0), 1.0);
    }
}
