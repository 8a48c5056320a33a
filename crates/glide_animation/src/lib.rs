//! Glide Animation Primitives
//!
//! The two motion sources the carousel sequences between:
//!
//! - **Tween**: a fixed-duration eased transition toward a known target,
//!   sampled by absolute timestamp and pinned exactly on completion
//! - **Decay**: geometric velocity decay for post-release inertia,
//!   integrated at a fixed nominal frame length
//!
//! Both are plain step functions with no scheduler of their own; the host
//! drives them once per frame, which makes them trivially reproducible
//! under a fake clock in tests.

pub mod decay;
pub mod easing;
pub mod tween;

pub use decay::{Decay, DecayConfig};
pub use easing::Easing;
pub use tween::Tween;
