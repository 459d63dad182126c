use bevy_app::{App, Plugin, Update};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_loop_tween::{LoopTweenPlugin, step_animators};
use bevy_time::TimePlugin;

use crate::{
    overlay::SharedSpinnerOverlay,
    progress::sync_arc_geometry,
    shape::{ShapeRotation, StrokeExtent},
    styling::SpinnerStyleSheet,
};

/// Installs the overlay spinner: time source, shared overlay + stylesheet
/// resources, and the per-frame animation/geometry systems.
#[derive(Default)]
pub struct SpinnerOverlayPlugin;

impl Plugin for SpinnerOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((TimePlugin, LoopTweenPlugin))
            .init_resource::<SharedSpinnerOverlay>()
            .init_resource::<SpinnerStyleSheet>()
            .add_systems(
                Update,
                (
                    step_animators::<ShapeRotation>,
                    step_animators::<StrokeExtent>,
                    sync_arc_geometry,
                )
                    .chain(),
            );
    }
}
