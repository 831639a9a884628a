//! Spawns a minimal tunnel rig directly into the Bevy ECS.
//!
//! The rig is what a VR runtime integration would otherwise build: a player
//! capsule steered by a tracked head, a hand with a laser pointer, a viewer
//! camera, the eight managed UI elements, menu buttons and a column of
//! strata cubes.

use bevy::prelude::*;

use crate::components::{
    HeadTracking, LabelText, LaserPointer, Player, SurfaceMaterial, UiActive, UiElement,
};
use crate::config::{SceneConfig, WaypointConfig};
use crate::locomotion::{CharacterController, VerticalMotion};
use crate::scene::SceneRig;

/// Names of the clickable menu buttons spawned by [`spawn_rig`].
pub const BUTTON_NAMES: [&str; 6] = [
    "ProjectOverviewButton",
    "LogBookButton",
    "StrataInformationButton",
    "TutorialsButton",
    "SwitchLineButton",
    "SwitchPerspectiveButton",
];

/// Entities created by [`spawn_rig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnedRig {
    /// References to hand to the scene coordinator.
    pub rig: SceneRig,
    /// Head-mounted display.
    pub hmd: Entity,
    /// Managed UI elements in [`UiElement::ALL`] order.
    pub elements: Vec<Entity>,
    /// Menu buttons in [`BUTTON_NAMES`] order.
    pub buttons: Vec<Entity>,
    /// Strata cubes, one per known material.
    pub cubes: Vec<Entity>,
}

/// Spawns the rig with the player standing at `start`.
pub fn spawn_rig(commands: &mut Commands, start: Vec3) -> SpawnedRig {
    let hmd = commands
        .spawn((
            Name::new("Hmd"),
            Transform::from_translation(start + Vec3::Y * 1.7),
        ))
        .id();
    let player = commands
        .spawn((
            Name::new("Player"),
            Player,
            HeadTracking { hmd },
            Transform::from_translation(start),
            CharacterController::default(),
            VerticalMotion::default(),
        ))
        .id();
    let hand = commands
        .spawn((
            Name::new("RightHand"),
            LaserPointer,
            Transform::from_translation(start + Vec3::new(0.3, 1.2, -0.3)),
        ))
        .id();
    let viewer = commands
        .spawn((
            Name::new("ViewerCamera"),
            Transform::from_translation(start + Vec3::Y * 1.7),
        ))
        .id();
    #[cfg(feature = "render")]
    commands.entity(viewer).insert(Camera3d::default());

    let elements = UiElement::ALL
        .iter()
        .map(|element| {
            let mut entity = commands.spawn((
                Name::new(format!("{element:?}")),
                *element,
                UiActive(false),
                Transform::default(),
            ));
            if *element == UiElement::StrataLabel {
                entity.insert(LabelText::default());
            }
            #[cfg(feature = "render")]
            entity.insert(Visibility::Hidden);
            entity.id()
        })
        .collect();

    let buttons = BUTTON_NAMES
        .iter()
        .map(|name| commands.spawn((Name::new(*name), Transform::default())).id())
        .collect();

    let cubes = (1..=8_u8)
        .map(|layer| {
            commands
                .spawn((
                    Name::new(format!("BaseCube ({layer})")),
                    SurfaceMaterial::new(format!("Material_{layer} (Instance)")),
                    Transform::from_xyz(4.0, -f32::from(layer), 0.0),
                ))
                .id()
        })
        .collect();

    SpawnedRig {
        rig: SceneRig {
            player: Some(player),
            hand: Some(hand),
            viewer: Some(viewer),
        },
        hmd,
        elements,
        buttons,
        cubes,
    }
}

/// Startup system spawning the demo rig and registering it.
pub fn spawn_world_system(mut commands: Commands) {
    let spawned = spawn_rig(&mut commands, Vec3::ZERO);
    commands.insert_resource(spawned.rig);
}

/// Waypoints and floor used when no scene file is given.
#[must_use]
pub fn demo_scene_config() -> SceneConfig {
    SceneConfig {
        ground_height: Some(0.0),
        right_line_start: Some(WaypointConfig {
            position: [2.5, 0.0, 0.0],
            rotation_degrees: [0.0; 3],
        }),
        left_line_start: Some(WaypointConfig {
            position: [-2.5, 0.0, 0.0],
            rotation_degrees: [0.0; 3],
        }),
        inside: Some(WaypointConfig {
            position: [0.0, 0.0, -20.0],
            rotation_degrees: [0.0; 3],
        }),
        outside: Some(WaypointConfig {
            position: [0.0, 30.0, 15.0],
            rotation_degrees: [0.0, -30.0, 0.0],
        }),
        ..SceneConfig::default()
    }
}
