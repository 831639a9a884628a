//! Keyboard stand-in for the VR controller actions.
//!
//! Lets the scene be driven from a desktop: WASD or the arrow keys act as
//! the move stick, Space and Left Shift as the up/down buttons, and Tab as
//! the menu-toggle button.

use bevy::prelude::*;

use crate::interface::MenuToggled;
use crate::locomotion::LocomotionInput;
use crate::plugins::{configure_tunnel_sets, TunnelSet};

/// Directional key states forming the move stick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "This struct represents the pressed state of exactly four directional keys."
)]
pub struct StickKeys {
    /// Forward key held.
    pub forward: bool,
    /// Back key held.
    pub back: bool,
    /// Left key held.
    pub left: bool,
    /// Right key held.
    pub right: bool,
}

/// Computes a stick reading from the key states, normalised on diagonals.
///
/// # Examples
///
/// ```
/// use bevy::math::Vec2;
/// use tunnelview::desktop_input::{stick_from_keys, StickKeys};
///
/// let keys = StickKeys { forward: true, right: true, ..Default::default() };
/// assert!((stick_from_keys(keys).length() - 1.0).abs() < 1e-6);
/// assert_eq!(stick_from_keys(StickKeys::default()), Vec2::ZERO);
/// ```
#[must_use]
pub fn stick_from_keys(keys: StickKeys) -> Vec2 {
    /// Maps a negative/positive key pair to an axis value.
    const fn axis(neg: bool, pos: bool) -> f32 {
        match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    Vec2::new(axis(keys.left, keys.right), axis(keys.back, keys.forward)).normalize_or_zero()
}

/// Writes keyboard state into [`LocomotionInput`] and fires menu toggles.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn keyboard_actions_system(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<LocomotionInput>,
) {
    let keys = StickKeys {
        forward: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
        back: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
    };
    input.move_axis = stick_from_keys(keys);
    input.move_up = keyboard.pressed(KeyCode::Space);
    input.move_down = keyboard.pressed(KeyCode::ShiftLeft);

    if keyboard.just_pressed(KeyCode::Tab) {
        commands.trigger(MenuToggled);
    }
}

/// Plugin binding the keyboard to the locomotion and menu actions.
#[derive(Debug, Default)]
pub struct DesktopInputPlugin;

impl Plugin for DesktopInputPlugin {
    fn build(&self, app: &mut App) {
        configure_tunnel_sets(app);
        app.init_resource::<LocomotionInput>();
        app.add_systems(Update, keyboard_actions_system.in_set(TunnelSet::Input));
    }
}
