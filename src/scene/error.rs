//! Missing-reference failures raised by the scene coordinator.

use bevy::prelude::*;
use log::error;
use thiserror::Error;

/// Reference the coordinator needed but could not resolve.
#[derive(Event, Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// One or both line start waypoints are not configured.
    #[error("line start points not assigned")]
    LineStartsMissing,
    /// One or both perspective waypoints are not configured.
    #[error("position references not set (inside: {inside}, outside: {outside})")]
    PerspectiveWaypointsMissing {
        /// Whether the inside waypoint is configured.
        inside: bool,
        /// Whether the outside waypoint is configured.
        outside: bool,
    },
    /// No player entity is registered with the rig.
    #[error("player not found; register it with the scene rig")]
    PlayerMissing,
    /// The player has no `CharacterController`.
    #[error("character controller not found on player {0:?}")]
    ControllerMissing(Entity),
    /// The player has no `VerticalMotion` component.
    #[error("movement controller not found on player {0:?}")]
    MovementMissing(Entity),
    /// The hand reference is unset.
    #[error("hand reference not set")]
    HandMissing,
    /// The hand carries no `LaserPointer`.
    #[error("laser pointer not found on hand {0:?}")]
    LaserPointerMissing(Entity),
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub(crate) fn log_scene_error(event: On<SceneError>) {
    error!("{}", event.event());
}
