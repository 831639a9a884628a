//! Floating strata label: delayed hiding and viewer-facing placement.

use std::f32::consts::PI;

use bevy::prelude::*;
use log::{debug, error};

use super::menu::MenuState;
use crate::components::UiElement;
use crate::scene::SceneRig;
use crate::strata::StrataType;
use crate::{LABEL_DISTANCE, LABEL_DURATION_SECS, LABEL_VERTICAL_OFFSET};

/// One-shot hide requests for the floating label.
///
/// Each click queues its own timer; none are cancelled or restarted by later
/// clicks. When any timer finishes the label is hidden, which is harmless if
/// it was already hidden.
#[derive(Resource, Debug, Default)]
pub struct PendingLabelHides(Vec<Timer>);

impl PendingLabelHides {
    /// Queues a hide `seconds` from now.
    pub fn schedule(&mut self, seconds: f32) {
        self.0.push(Timer::from_seconds(seconds, TimerMode::Once));
    }

    /// Number of hides still waiting.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no hide is waiting.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Advances all timers, drops the finished ones and returns how many
    /// finished during this tick.
    pub fn tick(&mut self, delta: std::time::Duration) -> usize {
        let before = self.0.len();
        self.0.retain_mut(|timer| !timer.tick(delta).is_finished());
        before - self.0.len()
    }
}

/// Shows the label for `material` and queues its automatic hide.
pub fn display_strata(menu: &mut MenuState, pending: &mut PendingLabelHides, material: &str) {
    let strata = StrataType::from_material_name(material);
    menu.show_label(strata);
    pending.schedule(LABEL_DURATION_SECS);
    debug!("showing strata label {:?} for material {material}", strata.label());
}

/// Ticks queued hides and hides the label when one expires.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn expire_label_system(
    time: Res<Time>,
    mut pending: ResMut<PendingLabelHides>,
    mut menu: ResMut<MenuState>,
) {
    if pending.is_empty() {
        return;
    }
    if pending.tick(time.delta()) > 0 && menu.label().is_some() {
        menu.hide_label();
        debug!("strata label hidden");
    }
}

/// Pose that keeps the label in front of the viewer and facing them.
///
/// The label sits `LABEL_DISTANCE` metres ahead of the viewer, dropped along
/// the viewer's up axis, and is turned so its front (`+Z`) looks back at the
/// viewer.
#[must_use]
pub fn label_pose(viewer: &Transform) -> Transform {
    let up = viewer.up();
    let position = viewer.translation
        + *viewer.forward() * LABEL_DISTANCE
        + *up * LABEL_VERTICAL_OFFSET;
    let mut pose = Transform::from_translation(position).looking_at(viewer.translation, up);
    pose.rotate_local_y(PI);
    pose
}

/// Re-places the visible label in front of the viewer camera every frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn billboard_label_system(
    menu: Res<MenuState>,
    rig: Res<SceneRig>,
    viewers: Query<&Transform, Without<UiElement>>,
    mut labels: Query<(&UiElement, &mut Transform)>,
) {
    if menu.label().is_none() {
        return;
    }
    let Some(viewer_entity) = rig.viewer else {
        error!("viewer camera reference is not set; strata label cannot follow the view");
        return;
    };
    let Ok(viewer) = viewers.get(viewer_entity) else {
        error!("viewer camera {viewer_entity:?} has no transform");
        return;
    };
    let pose = label_pose(viewer);
    for (element, mut transform) in &mut labels {
        if *element == UiElement::StrataLabel {
            transform.translation = pose.translation;
            transform.rotation = pose.rotation;
        }
    }
}
