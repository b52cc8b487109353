// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal transitions for content blocks.
//!
//! Every target starts pending. The first scroll update in which its extent
//! fires the [`RevealTrigger`](super::visibility::RevealTrigger) predicate
//! promotes it to revealed — permanently. Scrolling away and back never
//! reverts or re-triggers a target, and promoted targets drop out of the
//! scan entirely.
//!
//! The promotion is the contract; the 0→1 progress ramp afterwards is
//! purely presentational and sampled from the clock, so no per-frame state
//! needs updating.

use super::layout::{PageLayout, RevealTarget};
use super::visibility::RevealTrigger;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Length of the presentational fade/slide ramp.
pub const REVEAL_DURATION: Duration = Duration::from_millis(400);

/// Per-frame snapshot of every target's reveal progress, for the view code.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealFrame {
    pub features: [f32; super::layout::FEATURE_CARD_COUNT],
    pub gallery: [f32; super::layout::GALLERY_ITEM_COUNT],
    pub courses: [f32; super::layout::COURSE_ROW_COUNT],
    pub contact: f32,
}

#[derive(Debug, Clone)]
pub struct RevealAnimator {
    pending: Vec<RevealTarget>,
    revealed: HashMap<RevealTarget, Instant>,
    /// Skip the ramp and show revealed targets at full progress.
    instant: bool,
}

impl RevealAnimator {
    #[must_use]
    pub fn new(instant: bool) -> Self {
        Self {
            pending: RevealTarget::all(),
            revealed: HashMap::new(),
            instant,
        }
    }

    /// Scans pending targets against the trigger region and promotes those
    /// that fire. Returns how many were promoted.
    pub fn observe(
        &mut self,
        layout: &PageLayout,
        scroll_y: f32,
        viewport_height: f32,
        now: Instant,
    ) -> usize {
        let trigger = RevealTrigger::at(scroll_y, viewport_height);
        let before = self.pending.len();
        let revealed = &mut self.revealed;
        self.pending.retain(|target| {
            if trigger.fires(layout.reveal_span(*target)) {
                revealed.insert(*target, now);
                false
            } else {
                true
            }
        });
        let promoted = before - self.pending.len();
        if promoted > 0 {
            log::debug!("Revealed {promoted} element(s), {} pending", self.pending.len());
        }
        promoted
    }

    #[must_use]
    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed.contains_key(&target)
    }

    /// Ramp progress for a target: 0.0 while pending, 1.0 once settled.
    #[must_use]
    pub fn progress(&self, target: RevealTarget, now: Instant) -> f32 {
        let Some(revealed_at) = self.revealed.get(&target) else {
            return 0.0;
        };
        if self.instant {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(*revealed_at);
        (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0)
    }

    /// Whether any ramp is still in flight (drives the tick subscription).
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.instant {
            return false;
        }
        self.revealed
            .values()
            .any(|at| now.saturating_duration_since(*at) < REVEAL_DURATION)
    }

    /// Snapshot of every target's progress for one rendered frame.
    #[must_use]
    pub fn frame(&self, now: Instant) -> RevealFrame {
        let mut frame = RevealFrame::default();
        for (i, slot) in frame.features.iter_mut().enumerate() {
            *slot = self.progress(RevealTarget::FeatureCard(i), now);
        }
        for (i, slot) in frame.gallery.iter_mut().enumerate() {
            *slot = self.progress(RevealTarget::GalleryItem(i), now);
        }
        for (i, slot) in frame.courses.iter_mut().enumerate() {
            *slot = self.progress(RevealTarget::CourseRow(i), now);
        }
        frame.contact = self.progress(RevealTarget::ContactBlock, now);
        frame
    }
}
