//! Surface abstraction between the controller and the host UI
//!
//! The controller owns no widgets. Everything it needs from the embedding
//! UI - box metrics, the track transform, navigation button state, pointer
//! capture - goes through [`CarouselSurface`], so a headless implementation
//! is enough to drive the whole state machine in tests.

/// Measurement snapshot of the carousel's container, track, and items
///
/// Produced by [`CarouselSurface::measure`] on attach and on resize.
/// Items are assumed uniform in width; `gap` is the spacing between
/// consecutive items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceMetrics {
    /// Visible container width
    pub container_width: f32,
    /// Full scrollable track width
    pub track_width: f32,
    /// Number of items in the track
    pub item_count: usize,
    /// Width of a single item
    pub item_width: f32,
    /// Gap between consecutive items
    pub gap: f32,
}

impl SurfaceMetrics {
    /// Width of one navigation step (item plus gap)
    pub fn step_width(&self) -> f32 {
        self.item_width + self.gap
    }
}

/// Measurement and mutation boundary with the host UI
///
/// Navigation-related operations degrade gracefully: a surface without
/// navigation buttons simply ignores them. Pointer capture models the
/// host-global move/up listeners a drag needs; the controller balances
/// every `begin_pointer_capture` with an `end_pointer_capture` on all exit
/// paths, including teardown.
pub trait CarouselSurface {
    /// Measure the container, track, and items
    ///
    /// Returns `None` when the container has no track element; attaching
    /// to such a surface is a fatal construction error.
    fn measure(&self) -> Option<SurfaceMetrics>;

    /// Apply a horizontal translation to the track
    fn set_translate(&mut self, x: f32);

    /// Show or hide the navigation buttons
    fn set_nav_visible(&mut self, visible: bool);

    /// Enable or disable the previous/next navigation buttons
    fn set_nav_enabled(&mut self, prev: bool, next: bool);

    /// Acquire host-global pointer tracking for the duration of a drag
    fn begin_pointer_capture(&mut self) {}

    /// Release host-global pointer tracking
    fn end_pointer_capture(&mut self) {}

    /// Move keyboard focus to the carousel container
    fn focus(&mut self) {}
}
