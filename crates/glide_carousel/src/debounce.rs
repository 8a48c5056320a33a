//! Deadline-based debouncing for resize recomputation
//!
//! Continuous viewport resize delivers a burst of events; geometry is only
//! recomputed after a quiet window with no further triggers. The debouncer
//! is polled from the frame tick, so it needs no timer of its own and runs
//! unchanged under a fake clock.

/// Coalesces a burst of triggers into one firing after a quiet window
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay_ms: f64,
    deadline_ms: Option<f64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    /// Record a trigger at `now_ms`, pushing the deadline out
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.delay_ms);
    }

    /// Returns true exactly once per burst, when the quiet window elapses
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a firing is still pending
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_quiet_window() {
        let mut debouncer = Debouncer::new(150.0);
        debouncer.trigger(1000.0);

        assert!(debouncer.is_pending());
        assert!(!debouncer.poll(1100.0));
        assert!(debouncer.poll(1150.0));
        // Drained until the next trigger
        assert!(!debouncer.poll(1200.0));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_retrigger_extends_deadline() {
        let mut debouncer = Debouncer::new(150.0);
        debouncer.trigger(0.0);
        debouncer.trigger(100.0);

        assert!(!debouncer.poll(150.0));
        assert!(debouncer.poll(250.0));
    }

    #[test]
    fn test_idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(150.0);
        assert!(!debouncer.poll(1e9));
    }
}
