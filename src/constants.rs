//! Tunables shared across the locomotion and interface systems.
//!
//! These are the defaults the configuration layer falls back to when a scene
//! file leaves a value unspecified.

/// Horizontal walking speed in metres per second at full stick deflection.
pub const DEFAULT_MOVE_SPEED: f32 = 1.0;
/// Speed of explicit up/down flight in metres per second.
pub const DEFAULT_VERTICAL_SPEED: f32 = 10.0;
/// Downward acceleration applied in gravity mode, in metres per second squared.
pub const DEFAULT_GRAVITY: f32 = -9.81;
/// Seconds a strata label stays visible after a click.
pub const LABEL_DURATION_SECS: f32 = 6.0;
/// Distance in front of the viewer at which the strata label floats.
pub const LABEL_DISTANCE: f32 = 3.0;
/// Offset along the viewer's up axis; negative values drop the label.
pub const LABEL_VERTICAL_OFFSET: f32 = -0.7;
/// Name prefix identifying clickable strata geometry.
pub const STRATA_OBJECT_PREFIX: &str = "BaseCube";
