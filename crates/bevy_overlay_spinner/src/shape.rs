//! The animatable-vector-shape seam.
//!
//! Everything a renderer needs to draw a stroked circular arc is emitted as
//! plain component data: an [`ArcPath`], a [`StrokeStyle`], the visible
//! [`StrokeExtent`] window, and a [`ShapeRotation`] about the path center.
//! Path stroking and compositing themselves belong to the host toolkit.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_loop_tween::{
    EaseFunction, Lens, RemovalPolicy, RepeatCount, RepeatStrategy, Tween,
};
use bevy_math::{Rect, Vec2};

/// Twelve o'clock, where every spinner arc begins.
pub const ARC_START_ANGLE: f32 = -FRAC_PI_2;

/// End angle for a clockwise sweep covering `fraction` of the circle.
#[must_use]
pub fn arc_end_angle(fraction: f32) -> f32 {
    TAU * fraction + ARC_START_ANGLE
}

/// A circular stroke segment: center, radius, start/end angle, sweep direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub clockwise: bool,
}

impl ArcPath {
    /// Arc inscribed in `bounds` for a stroke of `stroke_width`.
    ///
    /// The radius is `(height - stroke_width) / 2` so the stroke stays inside
    /// the box, and the sweep runs clockwise from twelve o'clock over
    /// `fraction` of the full circle.
    #[must_use]
    pub fn inscribed(bounds: Rect, stroke_width: f32, fraction: f32) -> Self {
        Self {
            center: bounds.center(),
            radius: (bounds.height() - stroke_width) / 2.0,
            start_angle: ARC_START_ANGLE,
            end_angle: arc_end_angle(fraction),
            clockwise: true,
        }
    }
}

/// Path currently assigned to a shape entity. `None` means nothing to draw.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapePath(pub Option<ArcPath>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Square,
    Round,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
}

/// Visible window of a stroked path, both ends as fractions in `[0, 1]`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StrokeExtent {
    pub start: f32,
    pub end: f32,
}

impl StrokeExtent {
    /// Nothing visible.
    pub const HIDDEN: Self = Self { start: 0.0, end: 0.0 };
    /// The whole path visible.
    pub const FULL: Self = Self { start: 0.0, end: 1.0 };
}

/// Rotation of a shape about its path center, in radians.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeRotation(pub f32);

/// Which end of the visible stroke window an animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Start,
    End,
}

/// Lens moving one end of a [`StrokeExtent`] between two fractions.
#[derive(Debug, Clone, Copy)]
pub struct StrokeExtentLens {
    pub kind: StrokeKind,
    pub from: f32,
    pub to: f32,
}

impl Lens<StrokeExtent> for StrokeExtentLens {
    fn lerp(&mut self, target: &mut StrokeExtent, ratio: f32) {
        let value = self.from + (self.to - self.from) * ratio;
        match self.kind {
            StrokeKind::Start => target.start = value,
            StrokeKind::End => target.end = value,
        }
    }
}

/// Lens spinning a [`ShapeRotation`] between two angles.
#[derive(Debug, Clone, Copy)]
pub struct RotationLens {
    pub from: f32,
    pub to: f32,
}

impl Lens<ShapeRotation> for RotationLens {
    fn lerp(&mut self, target: &mut ShapeRotation, ratio: f32) {
        target.0 = self.from + (self.to - self.from) * ratio;
    }
}

/// Fully configured stroke-window animation descriptor.
///
/// `auto_reverses` alternates direction on every cycle, turning a grow into
/// a grow-then-shrink pulse.
#[must_use]
pub fn stroke_animation(
    kind: StrokeKind,
    from: f32,
    to: f32,
    duration: Duration,
    repeat: RepeatCount,
    auto_reverses: bool,
) -> Tween<StrokeExtent> {
    let strategy = if auto_reverses {
        RepeatStrategy::MirroredRepeat
    } else {
        RepeatStrategy::Restart
    };

    Tween::new(EaseFunction::Linear, duration, StrokeExtentLens { kind, from, to })
        .with_repeat(repeat, strategy)
}

/// Endless full-turn rotation starting from `from`.
///
/// The removal policy is `Freeze`: cancelling mid-flight leaves the shape at
/// its current angle instead of snapping back.
#[must_use]
pub fn rotation_animation(from: f32, duration: Duration) -> Tween<ShapeRotation> {
    Tween::new(
        EaseFunction::Linear,
        duration,
        RotationLens { from, to: from + TAU },
    )
    .with_repeat(RepeatCount::Infinite, RepeatStrategy::Restart)
    .with_removal_policy(RemovalPolicy::Freeze)
}
