//! Player locomotion: head-relative walking, explicit flight and gravity.
//!
//! Each frame every [`Player`] is moved in a fixed order: horizontal walk,
//! then either the flight step or the gravity step depending on its
//! [`VerticalMotion`] permission. Input arrives through the
//! [`LocomotionInput`] resource, which device bindings overwrite every
//! frame.

mod controller;
mod motion;

use bevy::prelude::*;
use log::error;

use crate::components::{HeadTracking, Player};
use crate::config::LocomotionSettings;
use crate::plugins::{configure_tunnel_sets, TunnelSet};

pub use controller::{CharacterController, GroundLevel};
pub use motion::{horizontal_displacement, VerticalIntent, VerticalMotion};

/// Current state of the locomotion actions.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Resource, Default)]
pub struct LocomotionInput {
    /// Two-axis stick: `x` right, `y` forward, each in `[-1, 1]`.
    pub move_axis: Vec2,
    /// Whether the "move up" action is held.
    pub move_up: bool,
    /// Whether the "move down" action is held.
    pub move_down: bool,
}

type PlayerRow<'w> = (
    Entity,
    &'w HeadTracking,
    &'w mut Transform,
    &'w mut CharacterController,
    &'w mut VerticalMotion,
);

/// Advances every player capsule by one frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn locomotion_system(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    settings: Res<LocomotionSettings>,
    ground: Option<Res<GroundLevel>>,
    heads: Query<&Transform, Without<Player>>,
    mut players: Query<PlayerRow<'_>, With<Player>>,
) {
    let dt = time.delta_secs();
    let floor = ground.map(|level| level.0);

    for (entity, head, mut transform, mut controller, mut vertical) in &mut players {
        match heads.get(head.hmd) {
            Ok(hmd) => {
                let step =
                    horizontal_displacement(input.move_axis, hmd.rotation, settings.speed, dt);
                controller.motion(&mut transform, step, floor);
            }
            Err(_) => error!("HMD {:?} for player {entity:?} has no transform", head.hmd),
        }

        if vertical.can_move_vertically() {
            let intent = VerticalIntent::from_buttons(input.move_up, input.move_down);
            let step = vertical.fly(intent, settings.vertical_speed, dt);
            if step != Vec3::ZERO {
                controller.motion(&mut transform, step, floor);
            }
        } else {
            let step = vertical.fall(settings.gravity, dt);
            let grounded = controller.motion(&mut transform, step, floor);
            vertical.land(grounded);
        }
    }
}

/// Plugin installing the locomotion controller.
#[derive(Debug, Default)]
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionInput>()
            .register_type::<VerticalMotion>()
            .register_type::<CharacterController>()
            .register_type::<GroundLevel>();
        configure_tunnel_sets(app);
        app.init_resource::<LocomotionInput>();
        app.init_resource::<LocomotionSettings>();
        app.add_systems(Update, locomotion_system.in_set(TunnelSet::Locomotion));
    }
}
