//! Interaction state machine for the carousel
//!
//! # State Machine
//!
//! ```text
//!                pointer down
//!     Idle ────────────────────► Dragging
//!       ▲                           │
//!       │                           │ release, |v| > min ──► Inertia
//!       │ settled                   │                           │
//!       │                           │ release otherwise         │ v decayed
//!       │                           ▼                           │ or bound hit
//!       └─────────────────────── Animating ◄────────────────────┘
//! ```
//!
//! Exactly one variant is live at a time. Each variant carries only the
//! data its loop needs, so entering a new state is a plain assignment that
//! structurally cancels the previous drag, coast, or animation - a stale
//! loop can never run after supersession.
//!
//! Any state may additionally be pre-empted by a fresh `Dragging` entry
//! (the user grabs the track mid-animation) or by an external `go_to`.

use glide_animation::{Decay, Tween};

/// Interaction state with per-variant data
#[derive(Clone, Copy, Debug, Default)]
pub enum CarouselState {
    /// At rest on a snap point
    #[default]
    Idle,
    /// Pointer held; translation follows the pointer with soft bounds
    Dragging {
        /// Horizontal coordinate where the drag began
        start_x: f32,
        /// Translation when the drag began
        start_translate: f32,
        /// Previous sample coordinate, for velocity
        last_x: f32,
        /// Previous sample timestamp in ms, for velocity
        last_time_ms: f64,
        /// Latest sampled velocity in px/ms
        velocity: f32,
    },
    /// Post-release coasting under decaying velocity
    Inertia {
        /// Physics integrator driving the coast
        decay: Decay,
    },
    /// Eased transition toward a snap point
    Animating {
        /// Transition toward the committed snap offset
        tween: Tween,
    },
}

impl CarouselState {
    /// Returns true while a frame loop is running (coasting or animating)
    pub fn needs_frame(&self) -> bool {
        matches!(
            self,
            CarouselState::Inertia { .. } | CarouselState::Animating { .. }
        )
    }

    /// Returns true while the pointer owns the translation
    pub fn is_dragging(&self) -> bool {
        matches!(self, CarouselState::Dragging { .. })
    }

    /// Returns true when settled on a snap point
    pub fn is_idle(&self) -> bool {
        matches!(self, CarouselState::Idle)
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            CarouselState::Idle => "idle",
            CarouselState::Dragging { .. } => "dragging",
            CarouselState::Inertia { .. } => "inertia",
            CarouselState::Animating { .. } => "animating",
        }
    }
}
