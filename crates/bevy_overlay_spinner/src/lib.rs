//! Toolkit-agnostic loading spinner overlay for Bevy ECS.
//!
//! `bevy_overlay_spinner` builds a circular indeterminate progress overlay —
//! a pulsing, rotating arc in a translucent container box, with optional
//! title/description labels — as plain entity/component data a renderer
//! consumes. It handles:
//! - preset-driven configuration ([`SizePreset`] × [`Theme`] →
//!   [`SpinnerConfiguration`], one deterministic table),
//! - arc geometry that follows the widget bounds,
//! - the endless breathing + spinning animation, including freeze-in-place
//!   semantics when it is interrupted,
//! - show/hide lifecycle on an arbitrary host entity, through caller-owned
//!   [`SpinnerOverlay`] instances or the shared [`show_spinner`] /
//!   [`hide_spinner`] pair.
//!
//! # Minimal setup
//!
//! ```
//! use bevy_overlay_spinner::{
//!     ShowOptions, SizePreset, SpinnerOverlayPlugin, Theme, WidgetBounds,
//!     bevy_app::App,
//!     bevy_math::Rect,
//!     hide_spinner, show_spinner,
//! };
//!
//! let mut app = App::new();
//! app.add_plugins(SpinnerOverlayPlugin);
//!
//! let host = app
//!     .world_mut()
//!     .spawn(WidgetBounds(Rect::new(0.0, 0.0, 390.0, 844.0)))
//!     .id();
//!
//! show_spinner(
//!     app.world_mut(),
//!     host,
//!     ShowOptions::default()
//!         .with_preset(SizePreset::Medium)
//!         .with_theme(Theme::Dark),
//! );
//! app.update();
//! hide_spinner(app.world_mut());
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod ecs;
pub mod logging;
pub mod overlay;
pub mod plugin;
pub mod progress;
pub mod shape;
pub mod styling;

pub use bevy_app;
pub use bevy_color;
pub use bevy_ecs;
pub use bevy_loop_tween;
pub use bevy_math;

pub use config::*;
pub use ecs::*;
pub use logging::*;
pub use overlay::*;
pub use plugin::*;
pub use progress::*;
pub use shape::*;
pub use styling::*;

pub mod prelude {
    //! Convenience exports for apps embedding the overlay spinner.

    pub use bevy_ecs::hierarchy::{ChildOf, Children};

    pub use crate::{
        ArcProgress, ArcPath, ArcShapes, ShapePath, ShapeRotation, SharedSpinnerOverlay,
        ShowOptions, SizePreset, SpinnerConfiguration, SpinnerOverlay, SpinnerOverlayPlugin,
        SpinnerStyleSheet, StrokeExtent, StrokeStyle, Theme, ThemeColors, UiLabel, WidgetBounds,
        build_configuration, hide_spinner, init_logging, show_spinner,
    };

    pub use crate::{bevy_app, bevy_color, bevy_ecs, bevy_loop_tween, bevy_math};
}
