//! Collision-aware capsule mover.
//!
//! `CharacterController` is the physics stand-in for the player capsule. It
//! owns no transform of its own: moves are written straight into the
//! entity's `Transform`, whose translation marks the capsule base. Ground
//! contact is resolved against the optional [`GroundLevel`] plane.

use bevy::prelude::*;

/// Height of the walkable floor in world space.
///
/// Absent when the scene has no floor; the capsule then never reports ground
/// contact and gravity keeps accelerating it.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct GroundLevel(pub f32);

/// Capsule collision state.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CharacterController {
    enabled: bool,
    grounded: bool,
}

impl Default for CharacterController {
    fn default() -> Self {
        Self {
            enabled: true,
            grounded: false,
        }
    }
}

impl CharacterController {
    /// Whether moves are currently applied.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the last move ended in floor contact.
    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Enables or disables collision handling. Toggling clears ground
    /// contact; it is re-established by the next move.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.grounded = false;
    }

    /// Applies `delta` to the capsule, stopping at the floor.
    ///
    /// Returns `true` when the capsule ends the move resting on the floor.
    /// A disabled controller ignores the move.
    pub fn motion(&mut self, transform: &mut Transform, delta: Vec3, floor: Option<f32>) -> bool {
        if !self.enabled {
            return false;
        }
        let mut target = transform.translation + delta;
        self.grounded = match floor {
            Some(height) if target.y <= height => {
                target.y = height;
                true
            }
            _ => false,
        };
        transform.translation = target;
        self.grounded
    }

    /// Places the capsule at a pose with collision disabled for the write.
    pub const fn teleport(
        &mut self,
        transform: &mut Transform,
        position: Vec3,
        rotation: Option<Quat>,
    ) {
        self.set_enabled(false);
        transform.translation = position;
        if let Some(rot) = rotation {
            transform.rotation = rot;
        }
        self.set_enabled(true);
    }
}
