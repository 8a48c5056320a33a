//! Glide Carousel
//!
//! A headless snap-and-inertia carousel controller: a drag-and-release,
//! velocity-tracking, snap-point-quantized horizontal positioning engine.
//!
//! # Features
//!
//! - **Snap geometry**: valid resting offsets derived from box metrics,
//!   with the last page forced flush against the track edge
//! - **Drag with soft bounds**: rubber-band damping past the translation
//!   bounds instead of a hard clamp
//! - **Inertia**: post-release coasting under geometric velocity decay,
//!   aborted at bounds instead of overshooting
//! - **Eased settling**: cubic ease-out transition pinned exactly onto the
//!   target snap point
//! - **FSM-based state**: explicit Idle / Dragging / Inertia / Animating
//!   union; entering a state cancels the previous loop structurally
//! - **Headless**: all host interaction goes through
//!   [`glide_platform::CarouselSurface`], so the full machine runs under a
//!   fake clock in tests
//!
//! # Example
//!
//! ```ignore
//! use glide_carousel::prelude::*;
//!
//! let mut carousel = Carousel::attach(surface, CarouselConfig::default(), now_ms)?;
//!
//! // Host event loop
//! carousel.handle_event(event, now_ms);
//! while carousel.needs_frame() {
//!     carousel.tick(next_frame_ms);
//! }
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod geometry;
pub mod state;

pub use config::CarouselConfig;
pub use controller::Carousel;
pub use debounce::Debouncer;
pub use geometry::Geometry;
pub use state::CarouselState;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CarouselConfig;
    pub use crate::controller::Carousel;
    pub use crate::geometry::Geometry;
    pub use crate::state::CarouselState;
    pub use glide_platform::prelude::*;
}
