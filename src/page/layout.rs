// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! The page is a single column of five sections. The hero is exactly one
//! viewport tall; the other sections use the fixed design heights below, so
//! the whole layout is a pure function of the viewport size. The view code
//! builds its widgets from the same constants, which keeps the rendered
//! page and the geometry the interaction components reason about in
//! agreement.

use super::section::SectionId;
use super::visibility::{CenterBand, Span};
use iced::Size;

pub const SECTION_FEATURES_HEIGHT: f32 = 560.0;
pub const SECTION_GALLERY_HEIGHT: f32 = 660.0;
pub const SECTION_COURSES_HEIGHT: f32 = 680.0;
pub const SECTION_CONTACT_HEIGHT: f32 = 520.0;

/// The hero never collapses below this, however small the window gets.
pub const HERO_MIN_HEIGHT: f32 = 480.0;

/// Vertical space reserved for a section's heading block.
pub const SECTION_HEADER_HEIGHT: f32 = 150.0;

pub const FEATURE_CARD_COUNT: usize = 3;
pub const FEATURE_CARD_HEIGHT: f32 = 300.0;

pub const GALLERY_ITEM_COUNT: usize = 4;
pub const GALLERY_COLUMNS: usize = 2;
pub const GALLERY_ROW_HEIGHT: f32 = 210.0;
pub const GALLERY_ROW_SPACING: f32 = 24.0;

pub const COURSE_ROW_COUNT: usize = 3;
pub const COURSE_ROW_HEIGHT: f32 = 96.0;
pub const COURSE_ROW_SPACING: f32 = 16.0;
/// Height of the tab strip between the courses heading and the rows.
pub const COURSE_TAB_STRIP_HEIGHT: f32 = 64.0;

pub const CONTACT_BLOCK_HEIGHT: f32 = 260.0;

/// An element eligible for the one-shot reveal animation.
///
/// Indices identify the card/item/row within its group. Course rows are
/// shared slots: both pricing panels render into the same three row
/// positions, so a row reveals once regardless of the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    FeatureCard(usize),
    GalleryItem(usize),
    CourseRow(usize),
    ContactBlock,
}

impl RevealTarget {
    /// Every reveal target on the page, in page order.
    #[must_use]
    pub fn all() -> Vec<RevealTarget> {
        let mut targets = Vec::new();
        for i in 0..FEATURE_CARD_COUNT {
            targets.push(RevealTarget::FeatureCard(i));
        }
        for i in 0..GALLERY_ITEM_COUNT {
            targets.push(RevealTarget::GalleryItem(i));
        }
        for i in 0..COURSE_ROW_COUNT {
            targets.push(RevealTarget::CourseRow(i));
        }
        targets.push(RevealTarget::ContactBlock);
        targets
    }
}

/// Computed vertical extents for every section and reveal target.
#[derive(Debug, Clone)]
pub struct PageLayout {
    sections: [Span; SectionId::ALL.len()],
    total_height: f32,
}

impl PageLayout {
    /// Derives the layout for the given viewport size.
    #[must_use]
    pub fn compute(viewport: Size) -> Self {
        let hero_height = viewport.height.max(HERO_MIN_HEIGHT);
        let heights = [
            hero_height,
            SECTION_FEATURES_HEIGHT,
            SECTION_GALLERY_HEIGHT,
            SECTION_COURSES_HEIGHT,
            SECTION_CONTACT_HEIGHT,
        ];

        let mut sections = [Span::new(0.0, 0.0); SectionId::ALL.len()];
        let mut top = 0.0;
        for (span, height) in sections.iter_mut().zip(heights) {
            *span = Span::new(top, height);
            top += height;
        }

        Self {
            sections,
            total_height: top,
        }
    }

    #[must_use]
    pub fn section_span(&self, id: SectionId) -> Span {
        self.sections[id.index()]
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Largest reachable scroll offset for the given viewport height.
    #[must_use]
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }

    /// The topmost section intersecting the band, if any.
    ///
    /// Topmost-wins is the tie-break when the band straddles a section
    /// boundary and several sections intersect it at once.
    #[must_use]
    pub fn section_at(&self, band: &CenterBand) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|id| band.intersects(self.section_span(*id)))
    }

    /// Vertical extent of a reveal target, derived from its section span.
    #[must_use]
    pub fn reveal_span(&self, target: RevealTarget) -> Span {
        match target {
            RevealTarget::FeatureCard(_) => {
                // All cards sit side by side in one row.
                let section = self.section_span(SectionId::Features);
                Span::new(section.top + SECTION_HEADER_HEIGHT, FEATURE_CARD_HEIGHT)
            }
            RevealTarget::GalleryItem(i) => {
                let section = self.section_span(SectionId::Gallery);
                let row = (i / GALLERY_COLUMNS) as f32;
                let top = section.top
                    + SECTION_HEADER_HEIGHT
                    + row * (GALLERY_ROW_HEIGHT + GALLERY_ROW_SPACING);
                Span::new(top, GALLERY_ROW_HEIGHT)
            }
            RevealTarget::CourseRow(i) => {
                let section = self.section_span(SectionId::Courses);
                let top = section.top
                    + SECTION_HEADER_HEIGHT
                    + COURSE_TAB_STRIP_HEIGHT
                    + i as f32 * (COURSE_ROW_HEIGHT + COURSE_ROW_SPACING);
                Span::new(top, COURSE_ROW_HEIGHT)
            }
            RevealTarget::ContactBlock => {
                let section = self.section_span(SectionId::Contact);
                Span::new(section.top + SECTION_HEADER_HEIGHT, CONTACT_BLOCK_HEIGHT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn layout() -> PageLayout {
        PageLayout::compute(Size::new(1100.0, 800.0))
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let layout = layout();
        let mut expected_top = 0.0;
        for id in SectionId::ALL {
            let span = layout.section_span(id);
            assert_abs_diff_eq!(span.top, expected_top);
            assert!(span.height > 0.0);
            expected_top = span.bottom();
        }
        assert_abs_diff_eq!(layout.total_height(), expected_top);
    }

    #[test]
    fn hero_fills_the_viewport() {
        let layout = PageLayout::compute(Size::new(1100.0, 900.0));
        assert_abs_diff_eq!(layout.section_span(SectionId::Hero).height, 900.0);
    }

    #[test]
    fn hero_never_collapses() {
        let layout = PageLayout::compute(Size::new(400.0, 200.0));
        assert_abs_diff_eq!(layout.section_span(SectionId::Hero).height, HERO_MIN_HEIGHT);
    }

    #[test]
    fn every_reveal_target_sits_inside_its_section() {
        let layout = layout();
        for target in RevealTarget::all() {
            let span = layout.reveal_span(target);
            let section = match target {
                RevealTarget::FeatureCard(_) => layout.section_span(SectionId::Features),
                RevealTarget::GalleryItem(_) => layout.section_span(SectionId::Gallery),
                RevealTarget::CourseRow(_) => layout.section_span(SectionId::Courses),
                RevealTarget::ContactBlock => layout.section_span(SectionId::Contact),
            };
            assert!(span.top >= section.top, "{target:?} starts above its section");
            assert!(
                span.bottom() <= section.bottom(),
                "{target:?} overflows its section"
            );
        }
    }

    #[test]
    fn max_scroll_reaches_the_contact_section() {
        let layout = layout();
        let max = layout.max_scroll(800.0);
        assert_abs_diff_eq!(max, layout.total_height() - 800.0);
        assert!(max > layout.section_span(SectionId::Courses).top);
    }

    #[test]
    fn reveal_target_count_matches_the_page() {
        assert_eq!(
            RevealTarget::all().len(),
            FEATURE_CARD_COUNT + GALLERY_ITEM_COUNT + COURSE_ROW_COUNT + 1
        );
    }
}
