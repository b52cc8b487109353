// SPDX-License-Identifier: MPL-2.0
//! Default values for user preferences.

use crate::ui::theming::ThemeMode;

pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::System;
pub const DEFAULT_REDUCE_MOTION: bool = false;
pub const DEFAULT_PARALLAX: bool = true;
