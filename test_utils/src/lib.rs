//! Utility helpers for tests.
//!
//! Builds headless apps with the tunnel plugins, a fixed frame delta and a
//! spawned rig, and captures coordinator errors for assertions.
pub mod app;
pub mod scene;

pub use app::{advance, tunnel_test_app, TestRig, FRAME};
pub use scene::{install_error_observer, CapturedSceneErrors};

use bevy::prelude::*;
use tunnelview::{UiActive, UiElement};

/// Returns the managed UI elements whose `UiActive` flag is set, in
/// [`UiElement::ALL`] order.
pub fn active_elements(world: &mut World) -> Vec<UiElement> {
    let mut query = world.query::<(&UiElement, &UiActive)>();
    let active: Vec<UiElement> = query
        .iter(world)
        .filter(|(_, active)| active.0)
        .map(|(element, _)| *element)
        .collect();
    UiElement::ALL
        .into_iter()
        .filter(|element| active.contains(element))
        .collect()
}

/// Asserts two vectors are within `1e-4` of each other.
///
/// # Panics
/// Panics with both values when they differ.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {expected:?}, got {actual:?}"
    );
}
