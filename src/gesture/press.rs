//! Press / long-press tracking.
//!
//! The host reports long presses for touch input only, so a held mouse
//! button is timed here. One `Press` per press, at most one `LongPress`.

use std::time::{Duration, Instant};

use super::event::GestureEvent;

pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct PressTracker {
    long_press: Duration,
    /// Start of the current press
    started: Option<Instant>,
    /// Whether `LongPress` already fired for the current press
    long_fired: bool,
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS)
    }
}

impl PressTracker {
    pub fn new(long_press: Duration) -> Self {
        Self {
            long_press,
            started: None,
            long_fired: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.started.is_some()
    }

    /// Feed the current button state. Call once per frame.
    pub fn update(&mut self, down: bool, now: Instant) -> Option<GestureEvent> {
        match (self.started, down) {
            (None, true) => {
                self.started = Some(now);
                self.long_fired = false;
                Some(GestureEvent::Press)
            }
            (Some(start), true) => {
                if !self.long_fired && now.saturating_duration_since(start) >= self.long_press {
                    self.long_fired = true;
                    Some(GestureEvent::LongPress)
                } else {
                    None
                }
            }
            (Some(_), false) => {
                self.started = None;
                None
            }
            (None, false) => None,
        }
    }

    /// True when a `LongPress` fired for the press held now or released on
    /// this frame. Its release must not count as a tap. Call once per frame
    /// after [`update`](Self::update); the flag clears once the press is over.
    pub fn swallow_click(&mut self) -> bool {
        let swallow = self.long_fired;
        if !self.is_pressed() {
            self.long_fired = false;
        }
        swallow
    }

    /// Record a long press the host already reported for this press.
    pub fn mark_long_press(&mut self) -> bool {
        let first = self.is_pressed() && !self.long_fired;
        self.long_fired = true;
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_once() {
        let mut tracker = PressTracker::default();
        let t0 = Instant::now();
        assert_eq!(tracker.update(true, t0), Some(GestureEvent::Press));
        assert_eq!(tracker.update(true, t0 + Duration::from_millis(16)), None);
        assert!(tracker.is_pressed());
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut tracker = PressTracker::new(Duration::from_millis(500));
        let t0 = Instant::now();
        tracker.update(true, t0);
        assert_eq!(tracker.update(true, t0 + Duration::from_millis(499)), None);
        assert_eq!(
            tracker.update(true, t0 + Duration::from_millis(500)),
            Some(GestureEvent::LongPress)
        );
        assert_eq!(tracker.update(true, t0 + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_release_resets() {
        let mut tracker = PressTracker::new(Duration::from_millis(100));
        let t0 = Instant::now();
        tracker.update(true, t0);
        assert_eq!(tracker.update(false, t0 + Duration::from_millis(50)), None);
        assert!(!tracker.is_pressed());
        // Held long after release: nothing
        assert_eq!(tracker.update(false, t0 + Duration::from_millis(500)), None);

        let t1 = t0 + Duration::from_millis(600);
        assert_eq!(tracker.update(true, t1), Some(GestureEvent::Press));
        assert_eq!(
            tracker.update(true, t1 + Duration::from_millis(100)),
            Some(GestureEvent::LongPress)
        );
    }

    #[test]
    fn test_click_swallowed_after_long_press() {
        let mut tracker = PressTracker::new(Duration::from_millis(500));
        let t0 = Instant::now();
        tracker.update(true, t0);
        assert!(!tracker.swallow_click());
        tracker.update(true, t0 + Duration::from_millis(600));
        assert!(tracker.swallow_click());

        // Release frame still swallows, then the flag is gone
        tracker.update(false, t0 + Duration::from_millis(650));
        assert!(tracker.swallow_click());
        assert!(!tracker.swallow_click());

        // Quick press afterwards is an ordinary tap
        let t1 = t0 + Duration::from_millis(2000);
        tracker.update(true, t1);
        tracker.update(false, t1 + Duration::from_millis(80));
        assert!(!tracker.swallow_click());
    }

    #[test]
    fn test_host_long_press_suppresses_timer() {
        let mut tracker = PressTracker::new(Duration::from_millis(100));
        let t0 = Instant::now();
        tracker.update(true, t0);
        assert!(tracker.mark_long_press());
        assert!(!tracker.mark_long_press());
        assert_eq!(tracker.update(true, t0 + Duration::from_millis(200)), None);
    }
}
