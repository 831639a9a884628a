//! Pure movement maths for the player capsule.
//!
//! Nothing here touches the ECS so the frame-step rules can be exercised
//! directly in unit tests. The per-frame system in the parent module feeds
//! these helpers with input, tunables and the frame delta.

use bevy::prelude::*;
use glam::{Quat, Vec2, Vec3};
use log::info;

/// Converts a two-axis stick reading into a horizontal displacement.
///
/// The stick is interpreted in head space: `axis.x` is right and `axis.y` is
/// forward (`-Z`). The direction is rotated by the head orientation and then
/// projected onto the ground plane without renormalising, so looking up or
/// down slows the walk just as the projected vector shrinks.
///
/// # Examples
///
/// ```
/// use glam::{Quat, Vec2, Vec3};
/// use tunnelview::locomotion::horizontal_displacement;
///
/// let step = horizontal_displacement(Vec2::new(0.0, 1.0), Quat::IDENTITY, 2.0, 0.5);
/// assert!((step - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
/// ```
#[must_use]
pub fn horizontal_displacement(axis: Vec2, head_rotation: Quat, speed: f32, dt: f32) -> Vec3 {
    let direction = head_rotation * Vec3::new(axis.x, 0.0, -axis.y);
    let planar = Vec3::new(direction.x, 0.0, direction.z);
    planar * speed * dt
}

/// Direction requested by the up/down buttons. Up wins when both are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalIntent {
    /// Neither button held.
    #[default]
    Hold,
    /// Climb.
    Up,
    /// Descend.
    Down,
}

impl VerticalIntent {
    /// Resolves the pair of button states.
    #[must_use]
    pub const fn from_buttons(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, _) => Self::Up,
            (false, true) => Self::Down,
            (false, false) => Self::Hold,
        }
    }
}

/// Vertical state of the capsule: flight permission plus recorded velocity.
///
/// With permission the capsule flies under explicit control; without it,
/// gravity integrates `velocity` every frame. Only one of the two steps
/// applies in any frame.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Component, Default)]
pub struct VerticalMotion {
    can_move_vertically: bool,
    velocity: f32,
}

impl VerticalMotion {
    /// Whether flight mode is active.
    #[must_use]
    pub const fn can_move_vertically(&self) -> bool {
        self.can_move_vertically
    }

    /// Last recorded vertical velocity in metres per second.
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Grants or revokes flight. Granting resets the velocity to zero.
    pub fn set_can_move_vertically(&mut self, can_move: bool) {
        self.can_move_vertically = can_move;
        if can_move {
            self.velocity = 0.0;
        }
        info!("Set can_move_vertically to: {can_move}");
    }

    /// Flight step. Records `±vertical_speed` while a button is held and
    /// returns the displacement for this frame.
    ///
    /// Releasing both buttons leaves `velocity` at its last value; it only
    /// clears on landing or when flight is granted again.
    pub fn fly(&mut self, intent: VerticalIntent, vertical_speed: f32, dt: f32) -> Vec3 {
        match intent {
            VerticalIntent::Up => {
                self.velocity = vertical_speed;
                Vec3::Y * vertical_speed * dt
            }
            VerticalIntent::Down => {
                self.velocity = -vertical_speed;
                Vec3::NEG_Y * vertical_speed * dt
            }
            VerticalIntent::Hold => Vec3::ZERO,
        }
    }

    /// Gravity step. Integrates velocity and returns this frame's fall.
    pub const fn fall(&mut self, gravity: f32, dt: f32) -> Vec3 {
        self.velocity += gravity * dt;
        Vec3::new(0.0, self.velocity * dt, 0.0)
    }

    /// Clamps a downward velocity to zero once the capsule rests on ground.
    pub const fn land(&mut self, grounded: bool) {
        if grounded && self.velocity < 0.0 {
            self.velocity = 0.0;
        }
    }
}
