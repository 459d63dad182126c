use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_math::Rect;

/// Local frame of a widget entity: origin and size in its parent's space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WidgetBounds(pub Rect);

impl WidgetBounds {
    #[must_use]
    pub fn width(&self) -> f32 {
        self.0.width()
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.0.height()
    }
}

/// Vertical offset from the parent's center applied when a child is centered.
///
/// Negative values move the child up, matching screen coordinates.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct VerticalOffset(pub f32);

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadius(pub f32);

/// Whole-subtree opacity multiplier in `[0, 1]`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Opacity(pub f32);

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFill(pub Color);

/// Marker for the host-sized overlay layer an attached spinner lives under.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayRoot;

/// Marker for the translucent container box of an overlay.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayContainer;

/// Marker for the inner box the arc widget is centered in.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerBox;

/// A text label rendered by the host toolkit.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct UiLabel {
    pub text: String,
}

impl UiLabel {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub size: f32,
    pub align: TextAlign,
    pub wrap: bool,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartTitleLabel;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartDescriptionLabel;
