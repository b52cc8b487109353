// SPDX-License-Identifier: MPL-2.0
//! Smooth scroll animation for click-to-scroll navigation.

use std::time::{Duration, Instant};

/// Length of a click-to-scroll animation.
pub const SCROLL_DURATION: Duration = Duration::from_millis(500);

/// An in-flight animated scroll between two absolute offsets.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// The offset to apply at `now`, eased with smoothstep.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= SCROLL_DURATION
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn starts_at_the_origin_offset() {
        let t0 = Instant::now();
        let anim = ScrollAnimation::new(100.0, 900.0, t0);
        assert_abs_diff_eq!(anim.sample(t0), 100.0);
        assert!(!anim.is_finished(t0));
    }

    #[test]
    fn ends_exactly_on_the_target() {
        let t0 = Instant::now();
        let anim = ScrollAnimation::new(100.0, 900.0, t0);
        let end = t0 + SCROLL_DURATION;
        assert_abs_diff_eq!(anim.sample(end), 900.0);
        assert!(anim.is_finished(end));
        // Sampling past the end stays clamped.
        assert_abs_diff_eq!(anim.sample(end + SCROLL_DURATION), 900.0);
    }

    #[test]
    fn midpoint_is_halfway_for_smoothstep() {
        let t0 = Instant::now();
        let anim = ScrollAnimation::new(0.0, 1000.0, t0);
        assert_abs_diff_eq!(anim.sample(t0 + SCROLL_DURATION / 2), 500.0, epsilon = 1.0);
    }

    #[test]
    fn eases_in_and_out() {
        let t0 = Instant::now();
        let anim = ScrollAnimation::new(0.0, 1000.0, t0);
        let early = anim.sample(t0 + SCROLL_DURATION / 10);
        let late = anim.sample(t0 + SCROLL_DURATION * 9 / 10);
        // Slow start, slow finish.
        assert!(early < 100.0, "got {early}");
        assert!(late > 900.0, "got {late}");
    }

    #[test]
    fn supports_upward_scrolls() {
        let t0 = Instant::now();
        let anim = ScrollAnimation::new(900.0, 100.0, t0);
        assert_abs_diff_eq!(anim.sample(t0 + SCROLL_DURATION), 100.0);
    }
}
