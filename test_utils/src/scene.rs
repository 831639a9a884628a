//! Helpers for observing scene coordinator errors in tests.
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use tunnelview::SceneError;

/// Scene errors captured during a test, in trigger order.
#[derive(Resource, Default, Debug)]
pub struct CapturedSceneErrors(pub Vec<SceneError>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_error(event: On<SceneError>, mut errors: ResMut<CapturedSceneErrors>) {
    errors.0.push(event.event().clone());
}

/// Installs the error-capturing observer and resource on the provided app.
pub fn install_error_observer(app: &mut App) {
    app.insert_resource(CapturedSceneErrors::default());
    app.world_mut().add_observer(record_error);
}
