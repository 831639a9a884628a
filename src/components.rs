//! ECS component types shared between the locomotion and interface systems.
//! Covers the player rig, clickable scene objects and managed UI elements.
use bevy::prelude::*;
use serde::Serialize;

/// Marker for the player capsule.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Player;

/// Head-mounted display the player steers by.
///
/// The referenced entity's `Transform` holds the world-space head pose
/// written by the tracking runtime.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct HeadTracking {
    /// Entity carrying the tracked head pose.
    pub hmd: Entity,
}

/// Surface material of a renderable scene object.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Eq, Deref, Serialize)]
#[reflect(Component)]
pub struct SurfaceMaterial(pub String);

impl SurfaceMaterial {
    /// Creates a material reference from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Hand-held laser pointer that emits pointer events.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct LaserPointer;

/// Observer entities attached to an active laser pointer.
///
/// Present only while the device is bound; removing [`LaserPointer`]
/// despawns the observers and drops this component.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PointerObservers(pub Vec<Entity>);

/// One of the eight UI objects managed by the menu.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[reflect(Component)]
pub enum UiElement {
    /// Root menu listing the content panels.
    MainMenu,
    /// Project overview content panel.
    ProjectOverview,
    /// Log book content panel.
    LogBook,
    /// Strata information content panel.
    StrataInformation,
    /// Tutorials content panel.
    Tutorials,
    /// Virtual keyboard prop shown with the log book.
    Keyboard,
    /// Mallet prop shown with the log book.
    Mallet,
    /// Floating strata label.
    StrataLabel,
}

impl UiElement {
    /// Every managed element.
    pub const ALL: [Self; 8] = [
        Self::MainMenu,
        Self::ProjectOverview,
        Self::LogBook,
        Self::StrataInformation,
        Self::Tutorials,
        Self::Keyboard,
        Self::Mallet,
        Self::StrataLabel,
    ];
}

/// Engine-side activity of a UI element, mirrored from the menu state.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Deref)]
#[reflect(Component, Default)]
pub struct UiActive(pub bool);

/// Text currently displayed by the floating strata label.
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Eq, Deref)]
#[reflect(Component, Default)]
pub struct LabelText(pub String);
