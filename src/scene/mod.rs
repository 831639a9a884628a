//! Scene coordinator: line switching and inside/outside perspective.
//!
//! Both operations teleport the player capsule between fixed
//! [`Waypoints`]. They are requested with the [`SwitchLine`] and
//! [`SwitchPerspective`] events and each flips one boolean in
//! [`SceneCoordinator`], so calling either twice returns to the start.
//! Missing references never panic: they surface as [`SceneError`] events,
//! are logged, and the request is dropped without touching any state.

mod error;

use bevy::prelude::*;
use log::info;

use crate::components::{LaserPointer, Player};
use crate::config::{Waypoint, Waypoints};
use crate::locomotion::{CharacterController, VerticalMotion};

pub use error::SceneError;

/// Entities the coordinator operates on, injected by whoever builds the rig.
#[derive(Resource, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Resource, Default)]
pub struct SceneRig {
    /// Player capsule.
    pub player: Option<Entity>,
    /// Hand carrying the laser pointer.
    pub hand: Option<Entity>,
    /// Camera the floating label faces.
    pub viewer: Option<Entity>,
}

/// Line and perspective the player is currently on.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource, Default)]
pub struct SceneCoordinator {
    on_right_line: bool,
    is_outside: bool,
}

impl Default for SceneCoordinator {
    fn default() -> Self {
        Self {
            on_right_line: true,
            is_outside: false,
        }
    }
}

impl SceneCoordinator {
    /// Whether the player is on the right-hand line.
    #[must_use]
    pub const fn on_right_line(&self) -> bool {
        self.on_right_line
    }

    /// Whether the player is at the outside viewpoint.
    #[must_use]
    pub const fn is_outside(&self) -> bool {
        self.is_outside
    }

    /// Position the next line switch moves to: the opposite line's start.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::LineStartsMissing`] unless both line starts are
    /// configured.
    pub const fn line_target(&self, waypoints: &Waypoints) -> Result<Vec3, SceneError> {
        let (Some(right), Some(left)) = (waypoints.right_line_start, waypoints.left_line_start)
        else {
            return Err(SceneError::LineStartsMissing);
        };
        Ok(if self.on_right_line { left } else { right })
    }

    /// Waypoint the next perspective switch moves to and the flight
    /// permission that goes with it: outside flies, inside walks.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::PerspectiveWaypointsMissing`] unless both
    /// viewpoints are configured.
    pub const fn perspective_target(
        &self,
        waypoints: &Waypoints,
    ) -> Result<(Waypoint, bool), SceneError> {
        let (Some(inside), Some(outside)) = (waypoints.inside, waypoints.outside) else {
            return Err(SceneError::PerspectiveWaypointsMissing {
                inside: waypoints.inside.is_some(),
                outside: waypoints.outside.is_some(),
            });
        };
        Ok(if self.is_outside {
            (inside, false)
        } else {
            (outside, true)
        })
    }
}

/// Request to teleport to the start of the other tunnel line.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchLine;

/// Request to swap between the inside and outside viewpoints.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchPerspective;

type PlayerParts<'w> = (
    &'w mut Transform,
    Option<&'w mut CharacterController>,
    Option<&'w mut VerticalMotion>,
);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_switch_line(
    _event: On<SwitchLine>,
    mut commands: Commands,
    rig: Res<SceneRig>,
    waypoints: Res<Waypoints>,
    mut coordinator: ResMut<SceneCoordinator>,
    mut players: Query<PlayerParts<'_>, With<Player>>,
) {
    let target = match coordinator.line_target(&waypoints) {
        Ok(target) => target,
        Err(err) => {
            commands.trigger(err);
            return;
        }
    };
    let Some(player) = rig.player else {
        commands.trigger(SceneError::PlayerMissing);
        return;
    };
    let Ok((mut transform, controller, _)) = players.get_mut(player) else {
        commands.trigger(SceneError::PlayerMissing);
        return;
    };
    let Some(mut controller) = controller else {
        commands.trigger(SceneError::ControllerMissing(player));
        return;
    };

    controller.teleport(&mut transform, target, None);
    coordinator.on_right_line = !coordinator.on_right_line;
    info!(
        "switched line; now on the {} line at {target}",
        if coordinator.on_right_line { "right" } else { "left" }
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_switch_perspective(
    _event: On<SwitchPerspective>,
    mut commands: Commands,
    rig: Res<SceneRig>,
    waypoints: Res<Waypoints>,
    mut coordinator: ResMut<SceneCoordinator>,
    mut players: Query<PlayerParts<'_>, With<Player>>,
) {
    info!("switch perspective requested");
    let (waypoint, can_fly) = match coordinator.perspective_target(&waypoints) {
        Ok(target) => target,
        Err(err) => {
            commands.trigger(err);
            return;
        }
    };
    let Some(player) = rig.player else {
        commands.trigger(SceneError::PlayerMissing);
        return;
    };
    let Ok((mut transform, controller, movement)) = players.get_mut(player) else {
        commands.trigger(SceneError::PlayerMissing);
        return;
    };
    let Some(mut controller) = controller else {
        commands.trigger(SceneError::ControllerMissing(player));
        return;
    };
    let Some(mut movement) = movement else {
        commands.trigger(SceneError::MovementMissing(player));
        return;
    };

    info!(
        "switching to {} position: {}",
        if can_fly { "outside" } else { "inside" },
        waypoint.position
    );
    controller.teleport(&mut transform, waypoint.position, Some(waypoint.rotation));
    movement.set_can_move_vertically(can_fly);
    coordinator.is_outside = !coordinator.is_outside;
    info!("final player position: {}", transform.translation);
}

/// Reports the configured references once the scene has been built.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn validate_scene_system(
    mut commands: Commands,
    rig: Res<SceneRig>,
    waypoints: Res<Waypoints>,
    players: Query<(&Transform, Has<CharacterController>, Has<VerticalMotion>), With<Player>>,
    pointers: Query<(), With<LaserPointer>>,
) {
    match waypoints.outside {
        Some(outside) => info!("outside position is set to: {}", outside.position),
        None => info!("outside position is not set"),
    }
    match waypoints.inside {
        Some(inside) => info!("inside position is set to: {}", inside.position),
        None => info!("inside position is not set"),
    }
    if waypoints.inside.is_none() || waypoints.outside.is_none() {
        commands.trigger(SceneError::PerspectiveWaypointsMissing {
            inside: waypoints.inside.is_some(),
            outside: waypoints.outside.is_some(),
        });
    }
    if waypoints.right_line_start.is_none() || waypoints.left_line_start.is_none() {
        commands.trigger(SceneError::LineStartsMissing);
    }

    match rig.player.map(|player| (player, players.get(player))) {
        Some((player, Ok((transform, has_controller, has_movement)))) => {
            info!("initial player position: {}", transform.translation);
            if !has_controller {
                commands.trigger(SceneError::ControllerMissing(player));
            }
            if !has_movement {
                commands.trigger(SceneError::MovementMissing(player));
            }
        }
        Some((_, Err(_))) | None => commands.trigger(SceneError::PlayerMissing),
    }

    match rig.hand {
        Some(hand) if pointers.contains(hand) => {}
        Some(hand) => commands.trigger(SceneError::LaserPointerMissing(hand)),
        None => commands.trigger(SceneError::HandMissing),
    }
}

/// Plugin installing the scene coordinator.
#[derive(Debug, Default)]
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneRig>()
            .register_type::<SceneCoordinator>()
            .register_type::<Waypoints>();
        app.init_resource::<SceneRig>();
        app.init_resource::<SceneCoordinator>();
        app.init_resource::<Waypoints>();
        app.add_observer(error::log_scene_error);
        app.add_observer(on_switch_line);
        app.add_observer(on_switch_perspective);
        app.add_systems(PostStartup, validate_scene_system);
    }
}
