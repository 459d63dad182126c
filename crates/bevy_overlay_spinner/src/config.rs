//! Size presets and the declarative configuration builder.
//!
//! [`build_configuration`] is the single place where a preset becomes
//! concrete frames, styling numbers and text policy. It is pure and
//! deterministic: the same inputs always produce the same configuration.

use bevy_math::{Rect, Vec2};

use crate::styling::{SpinnerColors, Theme, theme_colors};

/// Named size/layout/text profile selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizePreset {
    /// Spinner fills the host outright, no chrome at all.
    Micro,
    #[default]
    Small,
    /// Adds a description line under the spinner.
    Medium,
    /// Adds a title and a description line.
    Large,
    /// Host-sized backdrop with a default-size spinner in the middle.
    Full,
}

const DEFAULT_CONTAINER_SIDE: f32 = 136.0;
const DEFAULT_SPINNER_SIDE: f32 = 72.0;
const MEDIUM_CONTAINER_SIZE: Vec2 = Vec2::new(204.0, 170.0);
const LARGE_CONTAINER_SIZE: Vec2 = Vec2::new(427.0, 196.0);

const DEFAULT_CORNER_RADIUS: f32 = 8.0;
const DEFAULT_OPACITY: f32 = 0.85;
const DEFAULT_STROKE_WIDTH: f32 = 4.0;

// Vertical offsets from the container center. The spinner sits above center
// when text is shown, the labels below it.
const TEXTUAL_SPINNER_OFFSET: f32 = -17.0;
const TITLE_OFFSET: f32 = 48.0;
const DESCRIPTION_OFFSET: f32 = 61.0;
const MEDIUM_DESCRIPTION_OFFSET: f32 = 48.0;

/// Immutable layout/styling/text model for one overlay instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerConfiguration {
    pub container_frame: Rect,
    pub container_corner_radius: f32,
    pub container_opacity: f32,
    pub spinner_frame: Rect,
    pub stroke_width: f32,
    pub colors: SpinnerColors,
    pub title_text: Option<String>,
    pub description_text: Option<String>,
    pub spinner_offset: f32,
    pub title_offset: f32,
    pub description_offset: f32,
}

fn frame(size: Vec2) -> Rect {
    Rect::new(0.0, 0.0, size.x, size.y)
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.is_empty()).map(str::to_owned)
}

/// Map a preset + theme to a concrete [`SpinnerConfiguration`].
///
/// `title` and `description` are only carried into the configuration where
/// the preset's text policy asks for them (`Medium`: description only,
/// `Large`: both); empty strings count as absent.
///
/// # Panics
///
/// When the resulting spinner frame is degenerate or the stroke width leaves
/// no positive arc radius — both indicate a caller bug (typically a
/// zero-sized host), and proceeding would build an invisible widget.
#[must_use]
pub fn build_configuration(
    preset: SizePreset,
    theme: Theme,
    host_size: Vec2,
    title: Option<&str>,
    description: Option<&str>,
) -> SpinnerConfiguration {
    let colors = theme_colors(theme);

    let configuration = match preset {
        SizePreset::Micro => SpinnerConfiguration {
            container_frame: frame(host_size),
            container_corner_radius: 0.0,
            container_opacity: 1.0,
            spinner_frame: frame(host_size),
            stroke_width: if theme == Theme::TransparentDark { 1.0 } else { 2.0 },
            colors,
            title_text: None,
            description_text: None,
            spinner_offset: 0.0,
            title_offset: TITLE_OFFSET,
            description_offset: DESCRIPTION_OFFSET,
        },
        SizePreset::Small => SpinnerConfiguration {
            container_frame: frame(Vec2::splat(DEFAULT_CONTAINER_SIDE)),
            container_corner_radius: DEFAULT_CORNER_RADIUS,
            container_opacity: DEFAULT_OPACITY,
            spinner_frame: frame(Vec2::splat(DEFAULT_SPINNER_SIDE)),
            stroke_width: DEFAULT_STROKE_WIDTH,
            colors,
            title_text: None,
            description_text: None,
            spinner_offset: 0.0,
            title_offset: TITLE_OFFSET,
            description_offset: DESCRIPTION_OFFSET,
        },
        SizePreset::Medium => SpinnerConfiguration {
            container_frame: frame(MEDIUM_CONTAINER_SIZE),
            container_corner_radius: DEFAULT_CORNER_RADIUS,
            container_opacity: DEFAULT_OPACITY,
            spinner_frame: frame(Vec2::splat(DEFAULT_SPINNER_SIDE)),
            stroke_width: DEFAULT_STROKE_WIDTH,
            colors,
            title_text: None,
            description_text: non_empty(description),
            spinner_offset: TEXTUAL_SPINNER_OFFSET,
            title_offset: TITLE_OFFSET,
            description_offset: MEDIUM_DESCRIPTION_OFFSET,
        },
        SizePreset::Large => SpinnerConfiguration {
            container_frame: frame(LARGE_CONTAINER_SIZE),
            container_corner_radius: DEFAULT_CORNER_RADIUS,
            container_opacity: DEFAULT_OPACITY,
            spinner_frame: frame(Vec2::splat(DEFAULT_SPINNER_SIDE)),
            stroke_width: DEFAULT_STROKE_WIDTH,
            colors,
            title_text: non_empty(title),
            description_text: non_empty(description),
            spinner_offset: TEXTUAL_SPINNER_OFFSET,
            title_offset: TITLE_OFFSET,
            description_offset: DESCRIPTION_OFFSET,
        },
        SizePreset::Full => SpinnerConfiguration {
            container_frame: frame(host_size),
            container_corner_radius: 0.0,
            container_opacity: 1.0,
            spinner_frame: frame(Vec2::splat(DEFAULT_SPINNER_SIDE)),
            stroke_width: DEFAULT_STROKE_WIDTH,
            colors,
            title_text: None,
            description_text: None,
            spinner_offset: 0.0,
            title_offset: TITLE_OFFSET,
            description_offset: DESCRIPTION_OFFSET,
        },
    };

    let spinner = configuration.spinner_frame;
    assert!(
        spinner.width() > 0.0 && spinner.height() > 0.0,
        "spinner frame must be non-degenerate, got {}x{} for preset {preset:?}",
        spinner.width(),
        spinner.height(),
    );
    assert!(
        configuration.stroke_width < spinner.width().min(spinner.height()) / 2.0,
        "stroke width {} leaves no positive arc radius in a {}x{} spinner frame",
        configuration.stroke_width,
        spinner.width(),
        spinner.height(),
    );

    configuration
}
