//! Carousel controller: event routing, state transitions, and frame ticks
//!
//! The controller owns the surface, the derived geometry, and the current
//! position, and mediates every transition of the interaction state machine.
//! Hosts feed it normalized [`InputEvent`]s plus a timestamp, and drive
//! [`Carousel::tick`] once per frame while [`Carousel::needs_frame`] holds.
//!
//! All motion is single-threaded and cooperative. The tagged state union is
//! the cancellation mechanism: assigning a new state replaces the previous
//! variant's loop, so a superseded coast or animation can never touch the
//! translation again.

use glide_animation::{Decay, Easing, Tween};
use glide_platform::{
    CarouselError, CarouselSurface, InputEvent, Key, KeyState, PointerSample, Result,
};

use crate::config::CarouselConfig;
use crate::debounce::Debouncer;
use crate::geometry::Geometry;
use crate::state::CarouselState;

/// Snap-and-inertia carousel controller bound to a surface
pub struct Carousel<S: CarouselSurface> {
    surface: S,
    config: CarouselConfig,
    geometry: Geometry,
    state: CarouselState,
    current_index: usize,
    current_translate: f32,
    resize: Debouncer,
    captured: bool,
    // Last navigation state pushed to the surface, for deduplication
    nav_visible: Option<bool>,
    nav_enabled: Option<(bool, bool)>,
}

impl<S: CarouselSurface> Carousel<S> {
    /// Attach the controller to a surface
    ///
    /// Measures the surface, derives geometry, settles at index 0, and
    /// publishes the initial navigation state. Fails only when the surface
    /// has no track to translate.
    pub fn attach(surface: S, config: CarouselConfig, now_ms: f64) -> Result<Self> {
        let metrics = surface.measure().ok_or(CarouselError::MissingTrack)?;
        let geometry = Geometry::compute(&metrics);
        tracing::debug!(
            scrollable = geometry.scrollable,
            max_index = geometry.max_index,
            "carousel attached"
        );

        let mut carousel = Self {
            surface,
            config,
            geometry,
            state: CarouselState::Idle,
            current_index: 0,
            current_translate: 0.0,
            resize: Debouncer::new(config.resize_debounce_ms),
            captured: false,
            nav_visible: None,
            nav_enabled: None,
        };
        carousel.sync_nav_visibility();
        carousel.go_to(0, false, now_ms);
        Ok(carousel)
    }

    /// Detach and recover the surface, releasing any held pointer capture
    pub fn detach(mut self) -> S {
        self.release_capture();
        self.surface
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current interaction state
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Committed snap index
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current visual translation (may be between snap points, or past the
    /// bounds during drag overscroll)
    pub fn translate(&self) -> f32 {
        self.current_translate
    }

    /// Whether the content overflows the container
    pub fn is_scrollable(&self) -> bool {
        self.geometry.scrollable
    }

    /// Current derived geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Borrow the surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the host must keep driving [`Carousel::tick`]
    pub fn needs_frame(&self) -> bool {
        self.state.needs_frame() || self.resize.is_pending()
    }

    // =========================================================================
    // Event routing
    // =========================================================================

    /// Route a normalized input event, stamped with the host clock in ms
    pub fn handle_event(&mut self, event: InputEvent, now_ms: f64) {
        if let Some(sample) = event.pointer_sample() {
            match sample {
                PointerSample::Down { x } => self.start_drag(x, now_ms),
                PointerSample::Move { x } => self.drag_move(x, now_ms),
                PointerSample::Up => self.end_drag(now_ms),
            }
            return;
        }

        match event {
            InputEvent::Keyboard(key_event) => {
                if key_event.state != KeyState::Pressed || !self.geometry.scrollable {
                    return;
                }
                match key_event.key {
                    Key::Left => self.go_to_prev(now_ms),
                    Key::Right => self.go_to_next(now_ms),
                    Key::Unknown => {}
                }
            }
            InputEvent::NavPrev => {
                if self.geometry.scrollable {
                    self.surface.focus();
                    self.go_to_prev(now_ms);
                }
            }
            InputEvent::NavNext => {
                if self.geometry.scrollable {
                    self.surface.focus();
                    self.go_to_next(now_ms);
                }
            }
            InputEvent::Resized => self.resize.trigger(now_ms),
            // Pointer variants were consumed above
            _ => {}
        }
    }

    /// Navigate one step back
    pub fn go_to_prev(&mut self, now_ms: f64) {
        if self.current_index == 0 {
            return;
        }
        self.go_to(self.current_index - 1, true, now_ms);
    }

    /// Navigate one step forward
    pub fn go_to_next(&mut self, now_ms: f64) {
        self.go_to(self.current_index + 1, true, now_ms);
    }

    /// Commit to a snap index - the single authorized entry point
    ///
    /// Out-of-range indices are silently ignored. With `animate` false the
    /// translation jumps immediately (initialization and resize correction);
    /// otherwise an eased transition runs to completion unless superseded.
    /// Navigation enabled/disabled state is refreshed either way.
    pub fn go_to(&mut self, index: usize, animate: bool, now_ms: f64) {
        if index > self.geometry.max_index {
            return;
        }

        // An external commit while a drag is somehow live must not leak the
        // pointer capture.
        if self.state.is_dragging() {
            self.release_capture();
        }

        self.current_index = index;
        let target = self.geometry.snap_point(index);
        self.sync_nav_enabled();

        if !animate {
            self.state = CarouselState::Idle;
            self.current_translate = target;
            self.surface.set_translate(target);
            return;
        }

        tracing::trace!(index, target, from = self.current_translate, "snap transition");
        self.state = CarouselState::Animating {
            tween: Tween::new(
                self.current_translate,
                target,
                self.config.snap_duration_ms,
                Easing::CubicOut,
                now_ms,
            ),
        };
    }

    // =========================================================================
    // Drag protocol
    // =========================================================================

    fn start_drag(&mut self, x: f32, now_ms: f64) {
        if !self.geometry.scrollable {
            return;
        }

        self.surface.focus();
        if !self.captured {
            self.surface.begin_pointer_capture();
            self.captured = true;
        }

        tracing::debug!(x, superseded = self.state.name(), "drag start");
        // Entering Dragging cancels any in-flight coast or animation
        self.state = CarouselState::Dragging {
            start_x: x,
            start_translate: self.current_translate,
            last_x: x,
            last_time_ms: now_ms,
            velocity: 0.0,
        };
    }

    fn drag_move(&mut self, x: f32, now_ms: f64) {
        let CarouselState::Dragging {
            start_x,
            start_translate,
            last_x,
            last_time_ms,
            velocity,
        } = &mut self.state
        else {
            return;
        };

        let mut new_translate = *start_translate + (x - *start_x);

        // Soft bounds: displacement past a bound is damped, not clamped
        let max = self.geometry.max_translate();
        let min = self.geometry.min_translate();
        let resistance = self.config.overscroll_resistance;
        if new_translate > max {
            new_translate = max + (new_translate - max) * resistance;
        }
        if new_translate < min {
            new_translate = min + (new_translate - min) * resistance;
        }

        // Duplicate event delivery produces zero elapsed time; skip the
        // velocity sample but still move the track.
        let dt = (now_ms - *last_time_ms) as f32;
        if dt > 0.0 {
            *velocity = (x - *last_x) / dt;
            *last_x = x;
            *last_time_ms = now_ms;
        }

        self.current_translate = new_translate;
        self.surface.set_translate(new_translate);
    }

    fn end_drag(&mut self, now_ms: f64) {
        let CarouselState::Dragging { velocity, .. } = self.state else {
            return;
        };

        self.release_capture();

        if velocity.abs() > self.config.decay.min_velocity {
            tracing::debug!(velocity, "drag release, coasting");
            self.state = CarouselState::Inertia {
                decay: Decay::new(velocity, self.config.decay),
            };
        } else {
            self.snap_to_nearest(now_ms);
        }
    }

    fn release_capture(&mut self) {
        if self.captured {
            self.surface.end_pointer_capture();
            self.captured = false;
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance one frame at `now_ms`
    ///
    /// Runs the live loop for the current state (inertia integration or the
    /// snap animation) and evaluates pending debounced resize work. Returns
    /// true while further frames are needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        // A recompute mid-drag would reset the interaction state and drop
        // the live gesture; the deadline stays pending until the drag ends.
        if !self.state.is_dragging() && self.resize.poll(now_ms) {
            self.recalculate(now_ms);
        }

        match self.state {
            CarouselState::Idle | CarouselState::Dragging { .. } => {
                // Idle needs no frames; dragging is driven by pointer events
            }
            CarouselState::Inertia { mut decay } => {
                self.current_translate += decay.step();

                if self.geometry.is_out_of_bounds(self.current_translate) {
                    // Abort rather than visibly overshoot the bound
                    self.snap_to_nearest(now_ms);
                } else {
                    self.surface.set_translate(self.current_translate);
                    if decay.is_settled() {
                        self.snap_to_nearest(now_ms);
                    } else {
                        self.state = CarouselState::Inertia { decay };
                    }
                }
            }
            CarouselState::Animating { tween } => {
                self.current_translate = tween.sample(now_ms);
                self.surface.set_translate(self.current_translate);

                if tween.is_finished(now_ms) {
                    // sample() already pinned the exact target
                    self.state = CarouselState::Idle;
                    self.sync_nav_enabled();
                    tracing::trace!(index = self.current_index, "settled");
                }
            }
        }

        self.needs_frame()
    }

    fn snap_to_nearest(&mut self, now_ms: f64) {
        let nearest = self.geometry.nearest_index(self.current_translate);
        self.go_to(nearest, true, now_ms);
    }

    fn recalculate(&mut self, now_ms: f64) {
        // A surface that lost its track mid-session degrades to a no-op
        let Some(metrics) = self.surface.measure() else {
            return;
        };

        self.geometry = Geometry::compute(&metrics);
        self.sync_nav_visibility();

        // Re-resolve the committed index against the new geometry so the
        // translation never points at a stale snap offset
        let index = self.current_index.min(self.geometry.max_index);
        tracing::debug!(
            max_index = self.geometry.max_index,
            index,
            "geometry recomputed after resize"
        );
        self.go_to(index, false, now_ms);
    }

    // =========================================================================
    // Navigation observers
    // =========================================================================

    fn sync_nav_visibility(&mut self) {
        let visible = self.geometry.scrollable;
        if self.nav_visible != Some(visible) {
            self.nav_visible = Some(visible);
            self.surface.set_nav_visible(visible);
        }
    }

    fn sync_nav_enabled(&mut self) {
        let enabled = (
            self.current_index > 0,
            self.current_index < self.geometry.max_index,
        );
        if self.nav_enabled != Some(enabled) {
            self.nav_enabled = Some(enabled);
            self.surface.set_nav_enabled(enabled.0, enabled.1);
        }
    }
}
