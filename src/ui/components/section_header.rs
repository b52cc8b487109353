// SPDX-License-Identifier: MPL-2.0
//! Centered heading block used at the top of every section.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::SectionHeader;
//!
//! SectionHeader::new(i18n.tr("features-title"))
//!     .subtitle(i18n.tr("features-subtitle"))
//!     .view()
//! ```

use crate::page::layout::SECTION_HEADER_HEIGHT;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container};
use iced::{Element, Length, Theme};

/// Configuration for the section header component.
#[derive(Debug, Clone)]
pub struct SectionHeader {
    title: String,
    subtitle: Option<String>,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    /// Sets the smaller line under the title.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Renders the header inside its fixed design-height slot.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(self.title).size(typography::TITLE_LG));

        if let Some(subtitle) = self.subtitle {
            column = column.push(
                text(subtitle)
                    .size(typography::BODY)
                    .style(|theme: &Theme| {
                        let base = theme.extended_palette().background.base.text;
                        iced::widget::text::Style {
                            color: Some(iced::Color { a: 0.7, ..base }),
                        }
                    }),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fixed(SECTION_HEADER_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_with_and_without_subtitle() {
        let _plain: Element<'_, ()> = SectionHeader::new("Title").view();
        let _full: Element<'_, ()> = SectionHeader::new("Title").subtitle("Sub").view();
    }
}
