//! Headless walkthrough of the overlay spinner lifecycle.
//!
//! Shows each size preset on a phone-sized host entity, runs a few frames of
//! animation, and reports what the renderer would see.

use std::{thread, time::Duration};

use bevy_overlay_spinner::{
    ArcProgress, ArcShapes, ShapePath, ShapeRotation, ShowOptions, SizePreset,
    SpinnerOverlayPlugin, StrokeExtent, Theme, WidgetBounds,
    bevy_app::App,
    bevy_ecs::prelude::*,
    bevy_math::Rect,
    hide_spinner, init_logging, show_spinner,
};
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    init_logging();

    let mut app = App::new();
    app.add_plugins(SpinnerOverlayPlugin);

    let host = app
        .world_mut()
        .spawn(WidgetBounds(Rect::new(0.0, 0.0, 390.0, 844.0)))
        .id();

    let presets = [
        (SizePreset::Micro, Theme::TransparentDark),
        (SizePreset::Small, Theme::Dark),
        (SizePreset::Medium, Theme::Dark),
        (SizePreset::Large, Theme::Light),
        (SizePreset::Full, Theme::TransparentNormal),
    ];

    for (preset, theme) in presets {
        show_spinner(
            app.world_mut(),
            host,
            ShowOptions::default()
                .with_preset(preset)
                .with_theme(theme)
                .with_description("Fetching your library..."),
        );

        for _ in 0..12 {
            app.update();
            thread::sleep(FRAME);
        }

        report(app.world_mut(), preset, theme);
        hide_spinner(app.world_mut());
        app.update();
    }

    info!("demo finished");
}

fn report(world: &mut World, preset: SizePreset, theme: Theme) {
    let mut query = world.query::<(&ArcProgress, &ArcShapes)>();
    let Some((widget, shapes)) = query.iter(world).next() else {
        info!(?preset, ?theme, "no widget attached");
        return;
    };
    let (progress_shape, track_shape) = (shapes.progress, shapes.track);
    let stroke_width = widget.stroke_width;

    let radius = world
        .get::<ShapePath>(track_shape)
        .and_then(|path| path.0)
        .map(|path| path.radius);
    let rotation = world.get::<ShapeRotation>(progress_shape).map(|r| r.0);
    let extent = world.get::<StrokeExtent>(progress_shape).map(|e| e.end);

    info!(
        ?preset,
        ?theme,
        stroke_width,
        ?radius,
        ?rotation,
        ?extent,
        "spinner frame state"
    );
}
