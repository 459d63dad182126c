//! Overlay lifecycle: building the container/spinner/label tree on a host
//! entity, and the show/hide state machine around it.

use bevy_color::Color;
use bevy_ecs::{
    entity::Entity,
    hierarchy::{ChildOf, Children},
    prelude::*,
};
use bevy_math::{Rect, Vec2};
use tracing::{debug, trace};

use crate::{
    config::{SizePreset, SpinnerConfiguration, build_configuration},
    ecs::{
        BackgroundFill, CornerRadius, LabelStyle, Opacity, OverlayContainer, OverlayRoot,
        PartDescriptionLabel, PartTitleLabel, SpinnerBox, TextAlign, UiLabel, VerticalOffset,
        WidgetBounds,
    },
    progress::{
        ArcProgress, despawn_arc_progress, spawn_arc_progress, start_indeterminate_animation,
        stop_animation,
    },
    styling::{
        DESCRIPTION_TEXT_COLOR, SpinnerStyleSheet, TITLE_TEXT_COLOR, Theme, ThemeColors,
        container_background, theme_colors,
    },
};

pub const DEFAULT_TITLE: &str = "Please Wait";
pub const DEFAULT_DESCRIPTION: &str = "Loading...";

const LABEL_TEXT_SIZE: f32 = 14.0;
const LABEL_SIDE_MARGIN: f32 = 64.0;
const LABEL_HEIGHT: f32 = 20.0;

/// Defaulted parameters for [`show_spinner`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShowOptions {
    pub preset: SizePreset,
    pub theme: Theme,
    pub title: String,
    pub description: String,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            preset: SizePreset::Small,
            theme: Theme::Dark,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ShowOptions {
    #[must_use]
    pub fn with_preset(mut self, preset: SizePreset) -> Self {
        self.preset = preset;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct AttachedOverlay {
    root: Entity,
    widget: Entity,
}

/// A caller-owned spinner overlay bound to one host entity.
///
/// `attach` and `detach` are the explicit-ownership counterparts of the
/// shared [`show_spinner`] / [`hide_spinner`] pair. Attaching while already
/// visible tears the previous tree down first, so the host never accumulates
/// stacked spinners.
#[derive(Debug)]
pub struct SpinnerOverlay {
    preset: SizePreset,
    theme: Theme,
    host: Entity,
    title: String,
    description: String,
    attached: Option<AttachedOverlay>,
}

impl SpinnerOverlay {
    #[must_use]
    pub fn new(
        preset: SizePreset,
        theme: Theme,
        host: Entity,
        description: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            preset,
            theme,
            host,
            title: title.into(),
            description: description.into(),
            attached: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.attached.is_some()
    }

    /// Build the overlay tree under the host and start the animation.
    ///
    /// # Panics
    ///
    /// When the host entity is missing or its bounds are degenerate; a
    /// spinner attached to nothing (or to a zero-sized host) would be
    /// invisible, which is always a caller bug.
    pub fn attach(&mut self, world: &mut World) {
        self.teardown(world);

        let host_size = host_size(world, self.host);
        let configuration = build_configuration(
            self.preset,
            self.theme,
            host_size,
            Some(self.title.as_str()),
            Some(self.description.as_str()),
        );
        let colors = resolve_colors(world, self.theme);

        let root = world
            .spawn((
                OverlayRoot,
                WidgetBounds(Rect::new(0.0, 0.0, host_size.x, host_size.y)),
                BackgroundFill(Color::NONE),
                ChildOf(self.host),
            ))
            .id();

        let container = world
            .spawn((
                OverlayContainer,
                WidgetBounds(configuration.container_frame),
                CornerRadius(configuration.container_corner_radius),
                Opacity(configuration.container_opacity),
                BackgroundFill(colors.container),
                VerticalOffset(0.0),
                ChildOf(root),
            ))
            .id();

        let spinner_box = world
            .spawn((
                SpinnerBox,
                WidgetBounds(configuration.spinner_frame),
                BackgroundFill(Color::NONE),
                VerticalOffset(configuration.spinner_offset),
                ChildOf(container),
            ))
            .id();

        let widget = spawn_arc_progress(
            world,
            spinner_box,
            ArcProgress::new(1.0, colors.track, colors.progress, configuration.stroke_width),
            configuration.spinner_frame,
        );

        spawn_labels(world, container, &configuration);

        start_indeterminate_animation(world, widget);

        debug!(preset = ?self.preset, theme = ?self.theme, host = ?self.host, "overlay attached");
        self.attached = Some(AttachedOverlay { root, widget });
    }

    /// Stop the animation and remove the overlay tree. No-op when hidden.
    pub fn detach(&mut self, world: &mut World) {
        if self.attached.is_none() {
            trace!(host = ?self.host, "detach with nothing attached");
            return;
        }

        self.teardown(world);
        debug!(host = ?self.host, "overlay detached");
    }

    fn teardown(&mut self, world: &mut World) {
        let Some(attached) = self.attached.take() else {
            return;
        };

        stop_animation(world, attached.widget);
        despawn_arc_progress(world, attached.widget);

        if world.get_entity(attached.root).is_ok() {
            despawn_entity_tree(world, attached.root);
        }
    }
}

fn host_size(world: &World, host: Entity) -> Vec2 {
    let Some(bounds) = world.get::<WidgetBounds>(host) else {
        panic!("spinner host {host:?} does not exist or has no WidgetBounds");
    };

    let size = bounds.0.size();
    assert!(
        size.x > 0.0 && size.y > 0.0,
        "spinner host {host:?} has degenerate bounds {}x{}",
        size.x,
        size.y,
    );

    size
}

fn resolve_colors(world: &World, theme: Theme) -> ThemeColors {
    match world.get_resource::<SpinnerStyleSheet>() {
        Some(sheet) => sheet.resolve(theme),
        None => {
            let colors = theme_colors(theme);
            ThemeColors {
                track: colors.track,
                progress: colors.progress,
                container: container_background(theme),
            }
        }
    }
}

fn spawn_labels(world: &mut World, container: Entity, configuration: &SpinnerConfiguration) {
    let width = configuration.container_frame.width() - LABEL_SIDE_MARGIN;

    if let Some(title) = &configuration.title_text {
        world.spawn((
            PartTitleLabel,
            UiLabel::new(title.clone()),
            LabelStyle {
                color: TITLE_TEXT_COLOR,
                size: LABEL_TEXT_SIZE,
                align: TextAlign::Center,
                wrap: true,
            },
            WidgetBounds(Rect::new(0.0, 0.0, width, LABEL_HEIGHT)),
            VerticalOffset(configuration.title_offset),
            ChildOf(container),
        ));
    }

    if let Some(description) = &configuration.description_text {
        world.spawn((
            PartDescriptionLabel,
            UiLabel::new(description.clone()),
            LabelStyle {
                color: DESCRIPTION_TEXT_COLOR,
                size: LABEL_TEXT_SIZE,
                align: TextAlign::Center,
                wrap: true,
            },
            WidgetBounds(Rect::new(0.0, 0.0, width, LABEL_HEIGHT)),
            VerticalOffset(configuration.description_offset),
            ChildOf(container),
        ));
    }
}

fn despawn_entity_tree(world: &mut World, entity: Entity) {
    let children = world
        .get::<Children>(entity)
        .map(|children| children.iter().collect::<Vec<_>>())
        .unwrap_or_default();

    for child in children {
        if world.get_entity(child).is_ok() {
            despawn_entity_tree(world, child);
        }
    }

    let _ = world.despawn(entity);
}

/// The process-wide convenience overlay used by [`show_spinner`] /
/// [`hide_spinner`]. One spinner is visible at a time through this resource;
/// a new show call replaces whatever the previous one attached.
#[derive(Resource, Debug, Default)]
pub struct SharedSpinnerOverlay {
    active: Option<SpinnerOverlay>,
}

impl SharedSpinnerOverlay {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.active.as_ref().is_some_and(SpinnerOverlay::is_visible)
    }
}

/// Show the shared overlay on `host`, replacing any overlay it currently
/// shows anywhere. See [`SpinnerOverlay::attach`] for panics.
pub fn show_spinner(world: &mut World, host: Entity, options: ShowOptions) {
    let mut shared = world
        .remove_resource::<SharedSpinnerOverlay>()
        .unwrap_or_default();

    if let Some(previous) = shared.active.as_mut() {
        previous.detach(world);
    }

    let mut overlay = SpinnerOverlay::new(
        options.preset,
        options.theme,
        host,
        options.description,
        options.title,
    );
    overlay.attach(world);

    shared.active = Some(overlay);
    world.insert_resource(shared);
}

/// Hide the shared overlay. Safe to call with nothing shown.
pub fn hide_spinner(world: &mut World) {
    let Some(mut shared) = world.remove_resource::<SharedSpinnerOverlay>() else {
        return;
    };

    if let Some(active) = shared.active.as_mut() {
        active.detach(world);
    }

    shared.active = None;
    world.insert_resource(shared);
}
