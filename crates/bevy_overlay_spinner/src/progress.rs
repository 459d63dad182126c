//! The arc progress widget: two concentric arc shapes and the endless
//! pulse + spin animation that runs between show and hide.

use std::time::Duration;

use bevy_color::Color;
use bevy_ecs::{hierarchy::ChildOf, prelude::*};
use bevy_loop_tween::{Animator, RepeatCount, cancel_animator};
use bevy_math::Rect;
use tracing::debug;

use crate::{
    ecs::WidgetBounds,
    shape::{
        ArcPath, LineCap, ShapePath, ShapeRotation, StrokeExtent, StrokeKind, StrokeStyle,
        rotation_animation, stroke_animation,
    },
};

/// One rotation / one pulse cycle.
pub const INDETERMINATE_CYCLE: Duration = Duration::from_millis(1200);

/// The pulsing arc breathes between these two fractions of the circle.
pub const PULSE_MIN_EXTENT: f32 = 0.1;
pub const PULSE_MAX_EXTENT: f32 = 0.5;

/// A circular progress widget: a static full-circle track plus an animated
/// progress stroke sharing its center and radius.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ArcProgress {
    /// Fraction of the circle the progress path covers. The overlay always
    /// builds this with `1.0`; the visible arc length is driven by
    /// [`StrokeExtent`], not by this value.
    pub fraction: f32,
    pub track_color: Color,
    pub progress_color: Color,
    pub stroke_width: f32,
}

impl ArcProgress {
    /// # Panics
    ///
    /// When `stroke_width` is not strictly positive.
    #[must_use]
    pub fn new(fraction: f32, track_color: Color, progress_color: Color, stroke_width: f32) -> Self {
        assert!(
            stroke_width > 0.0,
            "arc stroke width must be positive, got {stroke_width}"
        );
        debug_assert!(
            (0.0..=1.0).contains(&fraction),
            "progress fraction out of range: {fraction}"
        );

        Self {
            fraction,
            track_color,
            progress_color,
            stroke_width,
        }
    }
}

/// Shape entities owned by an [`ArcProgress`] widget.
///
/// They stay owned across detach/reattach; teardown goes through
/// [`despawn_arc_progress`].
#[derive(Component, Debug, Clone, Copy)]
pub struct ArcShapes {
    pub track: Entity,
    pub progress: Entity,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackShape;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressShape;

/// Spawn an arc widget under `parent` with its two shape children.
///
/// Paths are assigned immediately and kept current by [`sync_arc_geometry`]
/// whenever the widget bounds change afterwards.
pub fn spawn_arc_progress(
    world: &mut World,
    parent: Entity,
    widget: ArcProgress,
    bounds: Rect,
) -> Entity {
    let stroke_width = widget.stroke_width;
    let track_color = widget.track_color;
    let progress_color = widget.progress_color;

    let widget_entity = world
        .spawn((widget, WidgetBounds(bounds), ChildOf(parent)))
        .id();

    let track = world
        .spawn((
            TrackShape,
            ShapePath::default(),
            StrokeStyle {
                color: track_color,
                width: stroke_width,
                cap: LineCap::Square,
            },
            StrokeExtent::FULL,
            ChildOf(widget_entity),
        ))
        .id();

    let progress = world
        .spawn((
            ProgressShape,
            ShapePath::default(),
            StrokeStyle {
                color: progress_color,
                width: stroke_width,
                cap: LineCap::Square,
            },
            StrokeExtent::HIDDEN,
            ShapeRotation::default(),
            ChildOf(widget_entity),
        ))
        .id();

    world
        .entity_mut(widget_entity)
        .insert(ArcShapes { track, progress });

    refresh_arc_paths(world, widget_entity);

    widget_entity
}

/// Recompute both arc paths of one widget from its current bounds.
fn refresh_arc_paths(world: &mut World, widget_entity: Entity) {
    let Some(widget) = world.get::<ArcProgress>(widget_entity).cloned() else {
        return;
    };
    let Some(bounds) = world.get::<WidgetBounds>(widget_entity).copied() else {
        return;
    };
    let Some(shapes) = world.get::<ArcShapes>(widget_entity).copied() else {
        return;
    };

    let track_path = ArcPath::inscribed(bounds.0, widget.stroke_width, 1.0);
    let progress_path = ArcPath::inscribed(bounds.0, widget.stroke_width, widget.fraction);

    set_path(world, shapes.track, track_path);
    set_path(world, shapes.progress, progress_path);
}

fn set_path(world: &mut World, shape: Entity, path: ArcPath) {
    if let Some(mut shape_path) = world.get_mut::<ShapePath>(shape) {
        // Skip identical writes so downstream change detection stays quiet.
        if shape_path.0 != Some(path) {
            shape_path.0 = Some(path);
        }
    }
}

/// Keep every arc widget's paths in sync with its bounds.
///
/// Runs each frame; writes only happen when the computed path actually
/// differs, so a stable layout costs nothing.
pub fn sync_arc_geometry(world: &mut World) {
    let widgets = {
        let mut query = world.query_filtered::<Entity, With<ArcProgress>>();
        query.iter(world).collect::<Vec<_>>()
    };

    for widget_entity in widgets {
        refresh_arc_paths(world, widget_entity);
    }
}

/// Start the endless breathing + spinning animation on a widget.
///
/// Any running stroke animation is cancelled first and the stroke window is
/// reset, then two animators run concurrently until [`stop_animation`]:
/// a full rotation every cycle (continuing from wherever a previous run
/// froze, so restarts never snap), and a stroke pulse growing and shrinking
/// between [`PULSE_MIN_EXTENT`] and [`PULSE_MAX_EXTENT`].
pub fn start_indeterminate_animation(world: &mut World, widget_entity: Entity) {
    let Some(shapes) = world.get::<ArcShapes>(widget_entity).copied() else {
        debug!(?widget_entity, "animation start on a widget without shapes");
        return;
    };

    cancel_animator::<StrokeExtent>(world, shapes.progress);

    if let Some(mut extent) = world.get_mut::<StrokeExtent>(shapes.progress) {
        *extent = StrokeExtent::HIDDEN;
    }

    let frozen_angle = world
        .get::<ShapeRotation>(shapes.progress)
        .copied()
        .unwrap_or_default()
        .0;

    world.entity_mut(shapes.progress).insert((
        Animator::new(rotation_animation(frozen_angle, INDETERMINATE_CYCLE)),
        Animator::new(stroke_animation(
            StrokeKind::End,
            PULSE_MIN_EXTENT,
            PULSE_MAX_EXTENT,
            INDETERMINATE_CYCLE,
            RepeatCount::Infinite,
            true,
        )),
    ));

    if let Some(mut extent) = world.get_mut::<StrokeExtent>(shapes.progress) {
        extent.end = PULSE_MIN_EXTENT;
    }

    debug!(?widget_entity, "indeterminate animation started");
}

/// Stop a widget's animation and take its shapes out of the view tree.
///
/// Cancels the stroke pulse, detaches both shapes from their parent, clears
/// the progress path and cancels the rotation (which freezes at its current
/// angle). Idempotent: with nothing running this is a no-op.
pub fn stop_animation(world: &mut World, widget_entity: Entity) {
    let Some(shapes) = world.get::<ArcShapes>(widget_entity).copied() else {
        return;
    };

    cancel_animator::<StrokeExtent>(world, shapes.progress);

    for shape in [shapes.track, shapes.progress] {
        if world.get_entity(shape).is_ok() {
            world.entity_mut(shape).remove::<ChildOf>();
        }
    }

    if let Some(mut path) = world.get_mut::<ShapePath>(shapes.progress) {
        path.0 = None;
    }

    cancel_animator::<ShapeRotation>(world, shapes.progress);

    debug!(?widget_entity, "animation stopped");
}

/// Despawn a widget and its shapes, attached or not.
pub fn despawn_arc_progress(world: &mut World, widget_entity: Entity) {
    if let Some(shapes) = world.get::<ArcShapes>(widget_entity).copied() {
        for shape in [shapes.track, shapes.progress] {
            if world.get_entity(shape).is_ok() {
                let _ = world.despawn(shape);
            }
        }
    }

    if world.get_entity(widget_entity).is_ok() {
        let _ = world.despawn(widget_entity);
    }
}
