//! Plugin group and frame ordering shared by the tunnel systems.

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use crate::interface::InterfacePlugin;
use crate::locomotion::LocomotionPlugin;
use crate::scene::ScenePlugin;

/// Frame phases, run in declaration order within `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TunnelSet {
    /// Device bindings write actions and pointer bindings are attached.
    Input,
    /// Player capsule moves.
    Locomotion,
    /// Menu, label and UI element state settle for the frame.
    Interface,
}

/// Orders the [`TunnelSet`] phases. Safe to call from several plugins.
pub fn configure_tunnel_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (TunnelSet::Input, TunnelSet::Locomotion, TunnelSet::Interface).chain(),
    );
}

/// Locomotion, interface and scene coordination in one group.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use tunnelview::TunnelPlugins;
///
/// let mut app = App::new();
/// app.add_plugins((MinimalPlugins, TunnelPlugins));
/// app.update();
/// ```
#[derive(Debug, Default)]
pub struct TunnelPlugins;

impl PluginGroup for TunnelPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(LocomotionPlugin)
            .add(InterfacePlugin)
            .add(ScenePlugin)
    }
}
