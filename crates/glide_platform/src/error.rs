//! Carousel error types

use thiserror::Error;

/// Errors raised while attaching the carousel to a surface
///
/// Everything past construction follows a degrade-don't-crash policy:
/// invalid input is absorbed into a safe no-op rather than surfaced.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// The container has no track element to translate
    #[error("carousel container has no track element")]
    MissingTrack,
}

/// Result type for carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;
