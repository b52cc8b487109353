// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared by the page sections.

pub mod section_header;

pub use section_header::SectionHeader;
