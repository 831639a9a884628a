#![cfg_attr(docsrs, feature(doc_cfg))]
//! VR locomotion and in-world menus for exploring tunnel strata.
//!
//! The crate is a set of Bevy plugins. [`LocomotionPlugin`] walks, flies and
//! drops the player capsule each frame; [`InterfacePlugin`] owns the menu
//! panels, the floating strata label and laser pointer clicks;
//! [`ScenePlugin`] teleports the player between tunnel lines and between
//! the inside and outside viewpoints. [`TunnelPlugins`] adds all three.
pub mod components;
pub mod config;
pub mod constants;
pub mod desktop_input;
pub mod interface;
pub mod locomotion;
pub mod logging;
pub mod plugins;
pub mod scene;
pub mod spawn_world;
pub mod strata;
pub use constants::*;

// Re-export commonly used items
pub use components::{
    HeadTracking, LabelText, LaserPointer, Player, SurfaceMaterial, UiActive, UiElement,
};
pub use config::{ConfigError, LocomotionSettings, SceneConfig, Waypoint, Waypoints};
pub use desktop_input::DesktopInputPlugin;
pub use interface::{InterfacePlugin, MenuState, MenuToggled, Panel, PointerClick};
pub use locomotion::{
    CharacterController, GroundLevel, LocomotionInput, LocomotionPlugin, VerticalMotion,
};
pub use logging::init as init_logging;
pub use plugins::{TunnelPlugins, TunnelSet};
pub use scene::{SceneCoordinator, SceneError, ScenePlugin, SceneRig, SwitchLine, SwitchPerspective};
pub use spawn_world::{spawn_rig, spawn_world_system};
pub use strata::StrataType;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use tunnelview::prelude::*;
    //! ```

    pub use crate::interface::{MenuState, MenuToggled, Panel, PointerClick};
    pub use crate::locomotion::{LocomotionInput, VerticalMotion};
    pub use crate::scene::{SceneCoordinator, SceneRig, SwitchLine, SwitchPerspective};
    pub use crate::StrataType;
    pub use crate::TunnelPlugins;
}
