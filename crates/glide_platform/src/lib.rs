//! Glide Platform Abstraction Layer
//!
//! Platform-agnostic traits and types for embedding the carousel controller.
//! The controller never touches a real widget tree; it talks to a
//! [`CarouselSurface`] for measurement and mutation, and consumes normalized
//! [`InputEvent`]s produced by the host.
//!
//! # Architecture
//!
//! - [`CarouselSurface`] - measurement and mutation boundary (track
//!   transform, navigation buttons, pointer capture)
//! - [`InputEvent`] - normalized pointer, keyboard, and navigation input
//! - [`CarouselError`] - fatal construction errors
//!
//! # Example
//!
//! ```ignore
//! use glide_platform::prelude::*;
//!
//! struct DomSurface { /* handles into the host UI */ }
//!
//! impl CarouselSurface for DomSurface {
//!     fn measure(&self) -> Option<SurfaceMetrics> { /* read box metrics */ }
//!     fn set_translate(&mut self, x: f32) { /* write transform */ }
//!     fn set_nav_visible(&mut self, visible: bool) { /* ... */ }
//!     fn set_nav_enabled(&mut self, prev: bool, next: bool) { /* ... */ }
//! }
//! ```

mod error;
mod input;
mod surface;

pub use error::{CarouselError, Result};
pub use input::{
    InputEvent, Key, KeyState, KeyboardEvent, MouseEvent, PointerSample, TouchEvent,
};
pub use surface::{CarouselSurface, SurfaceMetrics};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{CarouselError, Result};
    pub use crate::input::{
        InputEvent, Key, KeyState, KeyboardEvent, MouseEvent, PointerSample, TouchEvent,
    };
    pub use crate::surface::{CarouselSurface, SurfaceMetrics};
}
