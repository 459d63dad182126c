//! Theme color tables and the app-level stylesheet override resource.

use std::collections::HashMap;

use bevy_color::{Color, Srgba};
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Color/opacity profile applied to a spinner independent of its size preset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    TransparentDark,
    TransparentNormal,
}

const LIGHT_TRACK: Color = Color::Srgba(Srgba::new(0.82, 0.851, 0.898, 1.0));
const LIGHT_PROGRESS: Color = Color::Srgba(Srgba::new(0.0, 0.314, 0.949, 1.0));
const DARK_TRACK: Color = Color::Srgba(Srgba::new(0.333, 0.369, 0.42, 1.0));
const DARK_PROGRESS: Color = Color::Srgba(Srgba::new(0.867, 0.89, 0.929, 1.0));
const NEAR_BLACK: Color = Color::Srgba(Srgba::new(0.027, 0.035, 0.051, 1.0));

/// Title labels are white, description labels take the dimmer gray.
/// Fixed contrast choice, not configurable per theme.
pub const TITLE_TEXT_COLOR: Color = Color::WHITE;
pub const DESCRIPTION_TEXT_COLOR: Color = LIGHT_TRACK;

/// Track and progress stroke colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerColors {
    pub track: Color,
    pub progress: Color,
    pub theme: Theme,
}

/// Stroke palette lookup.
///
/// Only `Light` gets its own pair; the three dark-ish themes share one.
/// Kept as an explicit table because the theme names do not encode this.
#[must_use]
pub fn theme_colors(theme: Theme) -> SpinnerColors {
    match theme {
        Theme::Light => SpinnerColors {
            track: LIGHT_TRACK,
            progress: LIGHT_PROGRESS,
            theme,
        },
        Theme::Dark | Theme::TransparentDark | Theme::TransparentNormal => SpinnerColors {
            track: DARK_TRACK,
            progress: DARK_PROGRESS,
            theme,
        },
    }
}

/// Container background lookup.
///
/// Here the split is different: only `Dark` paints an opaque near-black box,
/// the other three keep the container fully transparent.
#[must_use]
pub fn container_background(theme: Theme) -> Color {
    match theme {
        Theme::Light | Theme::TransparentDark | Theme::TransparentNormal => Color::NONE,
        Theme::Dark => NEAR_BLACK,
    }
}

/// Resolved color triple for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub track: Color,
    pub progress: Color,
    pub container: Color,
}

/// Per-theme color overrides, resolved ahead of the built-in tables.
///
/// Applications that need brand colors set entries here (directly or from a
/// RON document via [`SpinnerStyleSheet::from_ron`]); themes without an entry
/// fall back to [`theme_colors`] / [`container_background`].
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinnerStyleSheet {
    pub themes: HashMap<Theme, ThemeColors>,
}

impl SpinnerStyleSheet {
    #[must_use]
    pub fn with_theme(mut self, theme: Theme, colors: ThemeColors) -> Self {
        self.themes.insert(theme, colors);
        self
    }

    pub fn set_theme(&mut self, theme: Theme, colors: ThemeColors) {
        self.themes.insert(theme, colors);
    }

    #[must_use]
    pub fn get_theme(&self, theme: Theme) -> Option<&ThemeColors> {
        self.themes.get(&theme)
    }

    /// Colors to use for `theme`: the override when present, the built-in
    /// tables otherwise.
    #[must_use]
    pub fn resolve(&self, theme: Theme) -> ThemeColors {
        self.themes.get(&theme).copied().unwrap_or_else(|| {
            let colors = theme_colors(theme);
            ThemeColors {
                track: colors.track,
                progress: colors.progress,
                container: container_background(theme),
            }
        })
    }

    /// Parse a stylesheet from RON text.
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}
