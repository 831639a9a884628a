//! Runtime configuration: movement tunables and scene waypoints.
//!
//! Defaults come from [`crate::constants`]. A scene file (JSON) can override
//! them and supply the four teleport waypoints. Rotations are written as
//! Euler angles in degrees (yaw, pitch, roll) to match how level designers
//! read them in an inspector.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use glam::EulerRot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_GRAVITY, DEFAULT_MOVE_SPEED, DEFAULT_VERTICAL_SPEED};

/// Movement tunables read by the locomotion system every frame.
#[derive(Resource, Reflect, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct LocomotionSettings {
    /// Walking speed in metres per second.
    pub speed: f32,
    /// Flight speed in metres per second.
    pub vertical_speed: f32,
    /// Gravity acceleration; negative pulls down.
    pub gravity: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_MOVE_SPEED,
            vertical_speed: DEFAULT_VERTICAL_SPEED,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

/// Fixed pose the player can be teleported to.
#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    /// World-space position of the capsule base.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Waypoint {
    /// Waypoint facing the default direction.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Waypoint with an explicit orientation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// Teleport targets used by the scene coordinator.
///
/// Each entry is optional so a partially authored scene still boots; the
/// operation needing a missing waypoint logs an error and does nothing.
#[derive(Resource, Reflect, Clone, Copy, Debug, Default, PartialEq)]
#[reflect(Resource, Default)]
pub struct Waypoints {
    /// Start of the right-hand tunnel line.
    pub right_line_start: Option<Vec3>,
    /// Start of the left-hand tunnel line.
    pub left_line_start: Option<Vec3>,
    /// Viewpoint inside the tunnel.
    pub inside: Option<Waypoint>,
    /// Viewpoint outside the tunnel.
    pub outside: Option<Waypoint>,
}

/// Errors raised while loading a scene file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read scene config {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The file is not valid scene JSON.
    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialised waypoint: position plus Euler angles in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointConfig {
    /// `[x, y, z]` position.
    pub position: [f32; 3],
    /// `[yaw, pitch, roll]` in degrees.
    #[serde(default)]
    pub rotation_degrees: [f32; 3],
}

impl From<WaypointConfig> for Waypoint {
    fn from(config: WaypointConfig) -> Self {
        let [yaw, pitch, roll] = config.rotation_degrees;
        Self::new(
            Vec3::from_array(config.position),
            Quat::from_euler(
                EulerRot::YXZ,
                yaw.to_radians(),
                pitch.to_radians(),
                roll.to_radians(),
            ),
        )
    }
}

/// On-disk scene description.
///
/// # Examples
///
/// ```
/// use tunnelview::config::SceneConfig;
///
/// let config = SceneConfig::from_json_str(r#"{
///     "ground_height": 0.0,
///     "right_line_start": { "position": [2.0, 0.0, 0.0] },
///     "left_line_start": { "position": [-2.0, 0.0, 0.0] }
/// }"#).unwrap();
/// let waypoints = config.waypoints();
/// assert!(waypoints.right_line_start.is_some());
/// assert!(waypoints.inside.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Movement tunables.
    pub locomotion: LocomotionSettings,
    /// Floor height, if the scene has a walkable floor.
    pub ground_height: Option<f32>,
    /// Right-hand line start.
    pub right_line_start: Option<WaypointConfig>,
    /// Left-hand line start.
    pub left_line_start: Option<WaypointConfig>,
    /// Inside viewpoint.
    pub inside: Option<WaypointConfig>,
    /// Outside viewpoint.
    pub outside: Option<WaypointConfig>,
}

impl SceneConfig {
    /// Parses a scene description from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a valid scene.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a scene file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Waypoint resource derived from this scene.
    #[must_use]
    pub fn waypoints(&self) -> Waypoints {
        Waypoints {
            right_line_start: self
                .right_line_start
                .map(|w| Vec3::from_array(w.position)),
            left_line_start: self.left_line_start.map(|w| Vec3::from_array(w.position)),
            inside: self.inside.map(Waypoint::from),
            outside: self.outside.map(Waypoint::from),
        }
    }

    /// Inserts the configured resources into `app`.
    pub fn apply(&self, app: &mut App) {
        app.insert_resource(self.locomotion);
        app.insert_resource(self.waypoints());
        if let Some(height) = self.ground_height {
            app.insert_resource(crate::locomotion::GroundLevel(height));
        }
    }
}
