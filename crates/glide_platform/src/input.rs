//! Input event types for pointer, keyboard, and navigation sources
//!
//! Mouse and touch input arrive as separate event families but drive the
//! same drag protocol. [`InputEvent::pointer_sample`] is the single
//! normalization point: it collapses both families into a horizontal
//! [`PointerSample`] the controller consumes.

/// Input events consumed by the carousel controller
#[derive(Clone, Debug)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Touch event (mobile/touchscreen, primary touch point)
    Touch(TouchEvent),
    /// Keyboard event
    Keyboard(KeyboardEvent),
    /// Previous-page navigation button activated
    NavPrev,
    /// Next-page navigation button activated
    NavNext,
    /// Host viewport resized; geometry must be recomputed
    Resized,
}

/// A pointer event normalized to the carousel's horizontal axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    /// Pointer made contact at the given horizontal coordinate
    Down {
        /// X position in host client coordinates
        x: f32,
    },
    /// Pointer moved while in contact
    Move {
        /// X position in host client coordinates
        x: f32,
    },
    /// Pointer contact ended (release position is irrelevant to the drag)
    Up,
}

impl InputEvent {
    /// Normalize a mouse or touch event into a single horizontal sample
    ///
    /// Returns `None` for events that play no part in the drag protocol
    /// (keyboard, navigation buttons, resize).
    pub fn pointer_sample(&self) -> Option<PointerSample> {
        match self {
            InputEvent::Mouse(MouseEvent::ButtonPressed { x, .. }) => {
                Some(PointerSample::Down { x: *x })
            }
            InputEvent::Mouse(MouseEvent::Moved { x, .. }) => Some(PointerSample::Move { x: *x }),
            InputEvent::Mouse(MouseEvent::ButtonReleased { .. }) => Some(PointerSample::Up),
            InputEvent::Touch(TouchEvent::Started { x, .. }) => {
                Some(PointerSample::Down { x: *x })
            }
            InputEvent::Touch(TouchEvent::Moved { x, .. }) => Some(PointerSample::Move { x: *x }),
            InputEvent::Touch(TouchEvent::Ended { .. }) | InputEvent::Touch(TouchEvent::Cancelled) => {
                Some(PointerSample::Up)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Copy, Debug)]
pub enum MouseEvent {
    /// Primary button pressed
    ButtonPressed {
        /// X position in client coordinates
        x: f32,
        /// Y position in client coordinates
        y: f32,
    },
    /// Mouse moved while the primary button is held
    Moved {
        /// X position in client coordinates
        x: f32,
        /// Y position in client coordinates
        y: f32,
    },
    /// Primary button released
    ButtonReleased {
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
    },
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events for touchscreens
///
/// The host is expected to deliver the primary touch point only; the
/// carousel is a single-pointer gesture.
#[derive(Clone, Copy, Debug)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// X position in client coordinates
        x: f32,
        /// Y position in client coordinates
        y: f32,
    },
    /// The touch moved
    Moved {
        /// X position in client coordinates
        x: f32,
        /// Y position in client coordinates
        y: f32,
    },
    /// The touch ended
    Ended {
        /// X position when ended
        x: f32,
        /// Y position when ended
        y: f32,
    },
    /// The touch was cancelled by the system (treated as a release)
    Cancelled,
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event
#[derive(Clone, Copy, Debug)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Keys the carousel reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Left arrow - navigate to the previous index
    Left,
    /// Right arrow - navigate to the next index
    Right,
    /// Any other key (ignored)
    Unknown,
}
