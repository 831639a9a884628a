//! Headless app builder with a deterministic frame delta.
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use tunnelview::spawn_world::SpawnedRig;
use tunnelview::{spawn_rig, GroundLevel, TunnelPlugins, Waypoints};

use crate::scene::install_error_observer;

/// Frame delta applied by every update after the first.
pub const FRAME: Duration = Duration::from_millis(100);

/// App plus the entities of the rig spawned into it.
#[derive(Debug)]
pub struct TestRig {
    /// The primed application.
    pub app: App,
    /// Entities created by [`spawn_rig`].
    pub spawned: SpawnedRig,
}

impl TestRig {
    /// Player capsule entity.
    ///
    /// # Panics
    /// Panics if the rig has no player, which `spawn_rig` never produces.
    #[must_use]
    pub fn player(&self) -> Entity {
        self.spawned.rig.player.unwrap_or_else(|| panic!("rig has no player"))
    }

    /// Laser pointer entity.
    ///
    /// # Panics
    /// Panics if the rig has no hand, which `spawn_rig` never produces.
    #[must_use]
    pub fn hand(&self) -> Entity {
        self.spawned.rig.hand.unwrap_or_else(|| panic!("rig has no hand"))
    }

    /// Current player transform.
    ///
    /// # Panics
    /// Panics if the player lost its transform.
    #[must_use]
    pub fn player_transform(&self) -> Transform {
        *self
            .app
            .world()
            .get::<Transform>(self.player())
            .unwrap_or_else(|| panic!("player has no transform"))
    }
}

/// Builds a primed app with the tunnel plugins, the given waypoints and an
/// optional floor, and a rig whose player stands at the origin.
///
/// The priming update runs startup and one zero-length frame; every later
/// update advances time by [`FRAME`].
pub fn tunnel_test_app(waypoints: Waypoints, ground: Option<f32>) -> TestRig {
    tunnelview::logging::init_for_tests();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.add_plugins(TunnelPlugins);
    install_error_observer(&mut app);
    app.insert_resource(waypoints);
    if let Some(height) = ground {
        app.insert_resource(GroundLevel(height));
    }

    let spawned = {
        let mut commands = app.world_mut().commands();
        spawn_rig(&mut commands, Vec3::ZERO)
    };
    app.world_mut().flush();
    app.insert_resource(spawned.rig);
    app.update();

    TestRig { app, spawned }
}

/// Runs `frames` updates.
pub fn advance(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
